use crate::ui::constants::APP_TITLE;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Help section definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Mission:",
        items: &[
            ("⏎  ", "Generate brand identity"),
            ("Esc", "Quit"),
        ],
    },
    HelpSection {
        title: "Dashboard:",
        items: &[
            ("e  ", "Edit logo"),
            ("a  ", "Animate logo"),
            ("s  ", "Save current image"),
            ("x  ", "Export brand as JSON"),
            ("y  ", "Copy palette"),
            ("n  ", "New brand"),
            ("k  ", "Select API key"),
        ],
    },
    HelpSection {
        title: "Editor:",
        items: &[
            ("⏎  ", "Apply edit instruction"),
            ("^A ", "Animate current image"),
            ("^O ", "Open local image"),
            ("^S ", "Save current image"),
            ("Esc", "Back to dashboard"),
        ],
    },
    HelpSection {
        title: "Video:",
        items: &[("s  ", "Save video"), ("b  ", "Back to dashboard")],
    },
    HelpSection {
        title: "Text fields:",
        items: &[
            ("^W ", "Delete word"),
            ("^U ", "Delete to start"),
            ("^V ", "Paste"),
            ("F2 ", "Select API key"),
        ],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default().borders(Borders::ALL).title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                format!("{} Help", APP_TITLE),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )]));

            for (key, desc) in section.items {
                lines.push(Line::from(format!("  {}  {}", key, desc)));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}
