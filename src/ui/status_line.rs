use crate::app::{AppState, Prompt, ViewState};
use crate::studio::CredentialProvider;
use crate::ui::constants::hints;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
        let (content, style) = Self::get_content_and_style(app);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn get_content_and_style(app: &AppState) -> (String, Style) {
        if app.show_help {
            return (
                String::from("Press ESC or q to close help"),
                Self::highlighted(Color::Cyan),
            );
        }
        if let Some(prompt) = &app.prompt {
            let text = match prompt {
                Prompt::Credential(_) => "⏎ use this key  Esc cancel",
                Prompt::ImagePath(_) => "⏎ load image  Esc cancel",
            };
            return (text.to_string(), Self::highlighted(Color::Cyan));
        }
        if let Some(ref msg) = app.message {
            return (msg.clone(), Self::highlighted(Color::Magenta));
        }

        let hint = match app.view_state() {
            ViewState::Input => hints::INPUT,
            ViewState::Loading => hints::LOADING,
            ViewState::Dashboard => hints::DASHBOARD,
            ViewState::EditImage => hints::EDITOR,
            ViewState::AnimateVideo => hints::VIDEO,
        };
        let key_state = if app.keyring.has_selected_key() {
            "video key ✓"
        } else {
            "no video key"
        };
        (
            format!("{} | {}", hint, key_state),
            Style::default().fg(Color::Gray).bg(Color::Black),
        )
    }

    fn highlighted(bg: Color) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}
