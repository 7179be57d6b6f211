use crate::app::{Notice, NoticeKind, Prompt};
use crate::ui::constants::{ACCENT, ERROR, MUTED};
use crate::ui::text::{with_cursor, TextWrapper};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// A rectangle of the given percentage width, centered, `height` rows tall.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub struct PromptRenderer;

impl PromptRenderer {
    pub fn render(frame: &mut Frame, prompt: &Prompt, area: Rect) {
        let (title, explanation, masked) = match prompt {
            Prompt::Credential(_) => (
                " Select API key ",
                "Video generation needs a key from a billing-enabled project. Paste it below.",
                true,
            ),
            Prompt::ImagePath(_) => (
                " Open image ",
                "Path to a PNG, JPEG, WebP or GIF file to edit instead of the logo.",
                false,
            ),
        };

        let input = prompt.input();
        let shown = if masked {
            let mut masked_input = input.clone();
            masked_input.buffer = "•".repeat(input.buffer.chars().count());
            with_cursor(&masked_input)
        } else {
            with_cursor(input)
        };

        let rect = centered_rect(60, 7, area);
        let lines = vec![
            Line::styled(explanation, Style::default().fg(MUTED)),
            Line::from(""),
            Line::styled(shown, Style::default().add_modifier(Modifier::BOLD)),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(title);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            rect,
        );
    }
}

pub struct NoticeRenderer;

impl NoticeRenderer {
    pub fn render(frame: &mut Frame, notice: &Notice, area: Rect) {
        let (title, color) = match notice.kind {
            NoticeKind::Info => (" Notice ", ACCENT),
            NoticeKind::Error => (" Error ", ERROR),
        };

        let width = area.width.saturating_mul(60) / 100;
        let mut lines: Vec<Line> = TextWrapper::wrap(&notice.text, width.saturating_sub(4) as usize)
            .into_iter()
            .map(Line::from)
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled("Press Enter to continue", Style::default().fg(MUTED)));

        let rect = centered_rect(60, lines.len() as u16 + 2, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            rect,
        );
    }
}
