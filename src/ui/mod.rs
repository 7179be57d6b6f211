pub mod constants;
pub mod dashboard;
pub mod editor;
pub mod help;
pub mod input;
pub mod loading;
pub mod modal;
pub mod status_line;
pub mod text;
pub mod video;


use crate::app::{AppState, Screen};
use constants::{ACCENT, APP_TITLE, MUTED};
use dashboard::DashboardRenderer;
use editor::EditorRenderer;
use help::HelpRenderer;
use input::InputRenderer;
use loading::LoadingRenderer;
use modal::{NoticeRenderer, PromptRenderer};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use status_line::StatusLineRenderer;
use video::VideoRenderer;

pub fn render(frame: &mut Frame, app: &AppState) {
    let size = frame.area();

    // Create main layout chunks
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_header(frame, app, chunks[0]);

    match &app.screen {
        Screen::Input { mission } => InputRenderer::render(frame, mission, chunks[1]),
        Screen::Loading { message, .. } => {
            LoadingRenderer::render(frame, message, app.tick, chunks[1])
        }
        Screen::Dashboard(workspace) => DashboardRenderer::render(frame, workspace, chunks[1]),
        Screen::EditImage {
            workspace,
            instruction,
        } => EditorRenderer::render(frame, workspace, instruction, chunks[1]),
        Screen::AnimateVideo { workspace, video } => {
            VideoRenderer::render(frame, workspace, video, chunks[1])
        }
    }

    // Overlays, bottom to top
    if let Some(prompt) = &app.prompt {
        PromptRenderer::render(frame, prompt, chunks[1]);
    }
    if let Some(notice) = &app.notice {
        NoticeRenderer::render(frame, notice, chunks[1]);
    }
    if app.show_help {
        HelpRenderer::render(frame, chunks[1]);
    }

    StatusLineRenderer::render(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" ◆ {} ", APP_TITLE),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(brand) = app.screen.brand() {
        spans.push(Span::styled(
            format!("· {}", brand.company_name),
            Style::default().fg(MUTED),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
