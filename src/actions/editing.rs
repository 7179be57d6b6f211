use crate::app::{AppState, TextInput};
use clipboard::{ClipboardContext, ClipboardProvider};

// Keys go to an open prompt first, otherwise to the screen's own text field.
fn focused_input(app: &mut AppState) -> Option<&mut TextInput> {
    if let Some(prompt) = app.prompt.as_mut() {
        return Some(prompt.input_mut());
    }
    app.screen.text_input_mut()
}

pub fn type_char(app: &mut AppState, c: char) {
    if let Some(input) = focused_input(app) {
        input.insert(c);
    }
}

pub fn backspace(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.backspace();
    }
}

pub fn delete_char(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.delete();
    }
}

pub fn move_cursor_left(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.move_left();
    }
}

pub fn move_cursor_right(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.move_right();
    }
}

pub fn move_cursor_home(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.move_home();
    }
}

pub fn move_cursor_end(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.move_end();
    }
}

pub fn delete_word_backward(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.delete_word_backward();
    }
}

pub fn delete_to_start(app: &mut AppState) {
    if let Some(input) = focused_input(app) {
        input.delete_to_start();
    }
}

pub fn paste_at_cursor(app: &mut AppState) {
    let content = match ClipboardContext::new().and_then(|mut ctx| ctx.get_contents()) {
        Ok(content) => content,
        Err(_) => {
            app.set_message("Clipboard unavailable");
            return;
        }
    };
    paste_text(app, &content);
}

/// Inserts text at the cursor, flattening newlines and tabs into spaces.
pub fn paste_text(app: &mut AppState, content: &str) {
    let cleaned = content
        .replace('\n', " ")
        .replace('\r', "")
        .replace('\t', "  ");

    if let Some(input) = focused_input(app) {
        input.insert_str(&cleaned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Prompt, Screen};
    use crate::config::AppConfig;
    use crate::studio::KeyRing;
    use std::sync::Arc;

    fn create_test_app() -> AppState {
        let config = AppConfig::default();
        AppState::new(config, Arc::new(KeyRing::default()))
    }

    #[test]
    fn test_typing_goes_to_mission() {
        let mut app = create_test_app();

        for c in "cafe".chars() {
            type_char(&mut app, c);
        }
        move_cursor_left(&mut app);
        backspace(&mut app);

        match &app.screen {
            Screen::Input { mission } => {
                assert_eq!(mission.as_str(), "cae");
                assert_eq!(mission.cursor_pos, 2);
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_prompt_takes_focus() {
        let mut app = create_test_app();
        app.prompt = Some(Prompt::Credential(TextInput::default()));

        paste_text(&mut app, "key\n123");

        assert_eq!(app.prompt.as_ref().unwrap().input().as_str(), "key 123");
        assert_eq!(app.screen, Screen::input(""));
    }

    #[test]
    fn test_loading_screen_ignores_typing() {
        let mut app = create_test_app();
        app.screen = Screen::Loading {
            job_id: 1,
            message: "Working".to_string(),
            resume: Box::new(Screen::input("")),
        };

        type_char(&mut app, 'x');
        assert!(matches!(app.screen, Screen::Loading { .. }));
    }
}
