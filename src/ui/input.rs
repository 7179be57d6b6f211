use crate::app::TextInput;
use crate::ui::constants::{ACCENT, MUTED};
use crate::ui::modal::centered_rect;
use crate::ui::text::{with_cursor, TextWrapper};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEADLINE: &str = "Build your brand identity in seconds.";
const SUBTITLE: &str =
    "Describe your business mission and get a name, palette, typography and logo.";
const EXAMPLE: &str = "e.g. An eco-friendly coffee shop in Bogotá that supports local farmers";

// Mission input screen
pub struct InputRenderer;

impl InputRenderer {
    pub fn render(frame: &mut Frame, mission: &TextInput, area: Rect) {
        let rect = centered_rect(70, 14, area);
        let inner_width = rect.width.saturating_sub(4) as usize;

        let mut lines = vec![
            Line::styled(HEADLINE, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(SUBTITLE, Style::default().fg(MUTED)),
            Line::from(""),
        ];

        if mission.buffer.is_empty() {
            lines.push(Line::styled(
                with_cursor(mission) + EXAMPLE,
                Style::default().fg(MUTED),
            ));
        } else {
            for line in TextWrapper::wrap(&with_cursor(mission), inner_width) {
                lines.push(Line::from(line));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" What is your business mission? ");

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Left),
            rect,
        );
    }
}
