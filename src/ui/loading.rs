use crate::ui::constants::{ACCENT, MUTED, SPINNER_FRAMES};
use crate::ui::modal::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct LoadingRenderer;

impl LoadingRenderer {
    pub fn render(frame: &mut Frame, message: &str, tick: u64, area: Rect) {
        let rect = centered_rect(80, 3, area);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    Self::spinner(tick).to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::styled("Our AI is crafting your brand...", Style::default().fg(MUTED)),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
    }

    pub fn spinner(tick: u64) -> char {
        SPINNER_FRAMES[(tick / 5) as usize % SPINNER_FRAMES.len()]
    }
}
