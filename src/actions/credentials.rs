use super::file;
use crate::app::{AppState, Prompt, TextInput};
use tracing::info;

pub fn open_credential_prompt(app: &mut AppState) {
    if app.pending_job().is_some() {
        return;
    }
    app.prompt = Some(Prompt::Credential(TextInput::default()));
}

pub fn cancel_prompt(app: &mut AppState) {
    app.prompt = None;
}

/// Applies whatever the open prompt collected.
pub fn confirm_prompt(app: &mut AppState) {
    let Some(prompt) = app.prompt.take() else {
        return;
    };
    match prompt {
        Prompt::Credential(input) => {
            if app.keyring.select(input.as_str()) {
                info!("API key selected for video generation");
                app.notify("API key selected. Start the animation again to use it.");
            } else {
                // Keep the prompt open until something usable is entered
                app.prompt = Some(Prompt::Credential(input));
            }
        }
        Prompt::ImagePath(input) => {
            if input.is_blank() {
                app.prompt = Some(Prompt::ImagePath(input));
            } else {
                file::load_image(app, input.as_str().trim());
            }
        }
    }
}
