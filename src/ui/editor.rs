use crate::app::{TextInput, Workspace};
use crate::ui::constants::{ACCENT, MUTED};
use crate::ui::dashboard::render_image_panel;
use crate::ui::text::{with_cursor, TextWrapper};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const EXAMPLE: &str = "e.g. Add a retro filter, make it neon, remove the background";

pub struct EditorRenderer;

impl EditorRenderer {
    pub fn render(frame: &mut Frame, workspace: &Workspace, instruction: &TextInput, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(5)])
            .split(area);

        let title = format!(" {} · current image ", workspace.brand.company_name);
        render_image_panel(frame, &title, &workspace.current_image, None, rows[0]);

        let width = rows[1].width.saturating_sub(4) as usize;
        let lines: Vec<Line> = if instruction.buffer.is_empty() {
            vec![Line::styled(
                with_cursor(instruction) + EXAMPLE,
                Style::default().fg(MUTED),
            )]
        } else {
            TextWrapper::wrap(&with_cursor(instruction), width)
                .into_iter()
                .map(Line::from)
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" How should we change it? ");
        frame.render_widget(Paragraph::new(lines).block(block), rows[1]);
    }
}
