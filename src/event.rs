use crate::actions::Action;
use crate::app::{AppState, ViewState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(10))? {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                return Ok(handle_key_event(app, key));
            }
            Event::Paste(text) if !app.show_help && app.notice.is_none() => {
                return Ok(Some(Action::PasteText(text)));
            }
            _ => {}
        }
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits, even while waiting on the provider
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // Overlays take the keyboard before the screen does
    if app.show_help {
        return handle_help_overlay(key);
    }
    if app.notice.is_some() {
        return handle_notice(key);
    }
    if app.prompt.is_some() {
        return handle_prompt(key);
    }

    match app.view_state() {
        ViewState::Input => handle_input_screen(key),
        ViewState::Loading => None,
        ViewState::Dashboard => handle_dashboard(key),
        ViewState::EditImage => handle_editor(key),
        ViewState::AnimateVideo => handle_video(key),
    }
}

fn handle_help_overlay(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            Some(Action::CloseHelp)
        }
        _ => None,
    }
}

fn handle_notice(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
        _ => None,
    }
}

fn handle_prompt(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::CancelPrompt),
        _ => handle_text_editing(key),
    }
}

/// Keys shared by every text field.
fn handle_text_editing(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Backspace, _) => Some(Action::Backspace),
        (Delete, _) => Some(Action::Delete),
        (Left, _) => Some(Action::MoveCursorLeft),
        (Right, _) => Some(Action::MoveCursorRight),
        (Home, _) => Some(Action::MoveCursorHome),
        (End, _) => Some(Action::MoveCursorEnd),

        // Emacs-style shortcuts
        (Char('w'), KeyModifiers::CONTROL) => Some(Action::DeleteWordBackward),
        (Char('u'), KeyModifiers::CONTROL) => Some(Action::DeleteToStart),
        (Char('e'), KeyModifiers::CONTROL) => Some(Action::MoveCursorEnd),
        (Char('v'), KeyModifiers::CONTROL) => Some(Action::PasteAtCursor),

        (Char(c), KeyModifiers::NONE) | (Char(c), KeyModifiers::SHIFT) => {
            Some(Action::TypeChar(c))
        }
        _ => None,
    }
}

fn handle_input_screen(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::F(1) => Some(Action::ShowHelp),
        KeyCode::F(2) => Some(Action::SelectApiKey),
        _ => handle_text_editing(key),
    }
}

fn handle_dashboard(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('e'), KeyModifiers::NONE) => Some(Action::EditLogo),
        (Char('a'), KeyModifiers::NONE) => Some(Action::Animate),
        (Char('n'), KeyModifiers::NONE) => Some(Action::NewBrand),
        (Char('s'), KeyModifiers::NONE) => Some(Action::SaveImage),
        (Char('x'), KeyModifiers::NONE) => Some(Action::ExportBrand),
        (Char('y'), KeyModifiers::NONE) => Some(Action::CopyPalette),
        (Char('k'), KeyModifiers::NONE) | (F(2), _) => Some(Action::SelectApiKey),
        (Char('?'), _) | (F(1), _) => Some(Action::ShowHelp),
        _ => None,
    }
}

fn handle_editor(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Enter, _) => Some(Action::Submit),
        (Esc, _) => Some(Action::Back),
        (Char('a'), KeyModifiers::CONTROL) => Some(Action::Animate),
        (Char('o'), KeyModifiers::CONTROL) => Some(Action::OpenImage),
        (Char('s'), KeyModifiers::CONTROL) => Some(Action::SaveImage),
        (F(1), _) => Some(Action::ShowHelp),
        (F(2), _) => Some(Action::SelectApiKey),
        _ => handle_text_editing(key),
    }
}

fn handle_video(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('s'), KeyModifiers::NONE) => Some(Action::SaveVideo),
        (Char('b'), KeyModifiers::NONE) | (Esc, _) => Some(Action::Back),
        (Char('k'), KeyModifiers::NONE) | (F(2), _) => Some(Action::SelectApiKey),
        (Char('?'), _) | (F(1), _) => Some(Action::ShowHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Prompt, Screen, TextInput, Workspace};
    use crate::config::AppConfig;
    use crate::media::EmbeddedImage;
    use crate::model::BrandIdentity;
    use crate::studio::KeyRing;
    use std::sync::Arc;

    fn create_test_app() -> AppState {
        let config = AppConfig::default();
        AppState::new(config, Arc::new(KeyRing::default()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn workspace() -> Workspace {
        let brand = BrandIdentity {
            company_name: "Acme".to_string(),
            mission_statement: String::new(),
            tagline: String::new(),
            colors: Vec::new(),
            fonts: Vec::new(),
            logo_prompt: String::new(),
            logo: Some(EmbeddedImage::new("image/jpeg", "AA==")),
        };
        Workspace::from_brand(brand).unwrap()
    }

    #[test]
    fn test_input_screen_types_letters() {
        let app = create_test_app();

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Some(Action::TypeChar('q'))
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(handle_key_event(&app, ctrl('w')), Some(Action::DeleteWordBackward));
    }

    #[test]
    fn test_dashboard_shortcuts() {
        let mut app = create_test_app();
        app.screen = Screen::Dashboard(workspace());

        assert_eq!(handle_key_event(&app, key(KeyCode::Char('e'))), Some(Action::EditLogo));
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('a'))), Some(Action::Animate));
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('n'))), Some(Action::NewBrand));
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn test_editor_keeps_letters_for_instruction() {
        let mut app = create_test_app();
        app.screen = Screen::EditImage {
            workspace: workspace(),
            instruction: TextInput::default(),
        };

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('a'))),
            Some(Action::TypeChar('a'))
        );
        assert_eq!(handle_key_event(&app, ctrl('a')), Some(Action::Animate));
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Some(Action::Back));
    }

    #[test]
    fn test_loading_only_quits() {
        let mut app = create_test_app();
        app.screen = Screen::Loading {
            job_id: 1,
            message: String::new(),
            resume: Box::new(Screen::input("")),
        };

        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('n'))), None);
        assert_eq!(handle_key_event(&app, ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_overlays_take_priority() {
        let mut app = create_test_app();
        app.screen = Screen::Dashboard(workspace());
        app.prompt = Some(Prompt::Credential(TextInput::default()));

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('q'))),
            Some(Action::TypeChar('q'))
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Some(Action::CancelPrompt));

        app.notify_error("boom");
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Some(Action::DismissNotice));

        app.show_help = true;
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Some(Action::CloseHelp));
    }
}
