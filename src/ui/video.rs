use crate::app::Workspace;
use crate::media::{format_size, VideoClip};
use crate::ui::constants::{ACCENT, MUTED};
use crate::ui::modal::centered_rect;
use crate::ui::text::truncate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct VideoRenderer;

impl VideoRenderer {
    pub fn render(frame: &mut Frame, workspace: &Workspace, video: &VideoClip, area: Rect) {
        let rect = centered_rect(70, 9, area);
        let width = rect.width.saturating_sub(12) as usize;
        let label = |text: &'static str| Span::styled(text, Style::default().fg(MUTED));

        let lines = vec![
            Line::styled(
                "Your brand animation is ready.",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(vec![label("Type    "), Span::raw(video.mime_type.clone())]),
            Line::from(vec![label("Size    "), Span::raw(format_size(video.size()))]),
            Line::from(vec![
                label("Source  "),
                Span::raw(truncate(&video.source_uri, width)),
            ]),
            Line::from(""),
            Line::styled("Press s to save it as MP4.", Style::default().fg(MUTED)),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" {} · animation ", workspace.brand.company_name));
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
