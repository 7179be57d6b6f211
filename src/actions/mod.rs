mod clipboard;
mod credentials;
mod editing;
mod file;
mod generation;
mod help;
mod navigation;

use crate::app::AppState;
use crate::jobs::Job;
use anyhow::Result;

// Re-export all public functions from submodules
pub use self::clipboard::*;
pub use self::credentials::*;
pub use self::editing::*;
pub use self::file::*;
pub use self::generation::*;
pub use self::help::*;
pub use self::navigation::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,
    DismissNotice,

    // Text editing
    TypeChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    DeleteWordBackward,
    DeleteToStart,
    PasteAtCursor,
    PasteText(String),

    // Submits the focused input: mission, edit instruction, or an open prompt
    Submit,
    CancelPrompt,

    // Workflow
    EditLogo,
    Animate,
    Back,
    NewBrand,
    OpenImage,

    // Files and clipboard
    SaveImage,
    SaveVideo,
    ExportBrand,
    CopyPalette,

    // Credentials
    SelectApiKey,

    // Help
    ShowHelp,
    CloseHelp,
}

/// Applies a user action. Returns the job to start when the action calls the AI service.
pub fn execute_action(action: Action, app: &mut AppState) -> Result<Option<Job>> {
    let job = match action {
        Action::Quit => {
            app.running = false;
            None
        }
        Action::DismissNotice => {
            app.notice = None;
            None
        }

        // Editing
        Action::TypeChar(c) => {
            editing::type_char(app, c);
            None
        }
        Action::Backspace => {
            editing::backspace(app);
            None
        }
        Action::Delete => {
            editing::delete_char(app);
            None
        }
        Action::MoveCursorLeft => {
            editing::move_cursor_left(app);
            None
        }
        Action::MoveCursorRight => {
            editing::move_cursor_right(app);
            None
        }
        Action::MoveCursorHome => {
            editing::move_cursor_home(app);
            None
        }
        Action::MoveCursorEnd => {
            editing::move_cursor_end(app);
            None
        }
        Action::DeleteWordBackward => {
            editing::delete_word_backward(app);
            None
        }
        Action::DeleteToStart => {
            editing::delete_to_start(app);
            None
        }
        Action::PasteAtCursor => {
            editing::paste_at_cursor(app);
            None
        }
        Action::PasteText(text) => {
            editing::paste_text(app, &text);
            None
        }

        Action::Submit => submit(app),
        Action::CancelPrompt => {
            credentials::cancel_prompt(app);
            None
        }

        // Workflow
        Action::EditLogo => {
            navigation::edit_logo(app);
            None
        }
        Action::Animate => generation::start_animation(app),
        Action::Back => {
            navigation::back_to_dashboard(app);
            None
        }
        Action::NewBrand => {
            navigation::new_brand(app);
            None
        }
        Action::OpenImage => {
            file::open_image_prompt(app);
            None
        }

        // Files
        Action::SaveImage => {
            let result = file::save_image(app);
            file::report_saved(app, result);
            None
        }
        Action::SaveVideo => {
            let result = file::save_video(app);
            file::report_saved(app, result);
            None
        }
        Action::ExportBrand => {
            let result = file::export_brand(app);
            file::report_saved(app, result);
            None
        }
        Action::CopyPalette => {
            clipboard::copy_palette(app);
            None
        }

        Action::SelectApiKey => {
            credentials::open_credential_prompt(app);
            None
        }

        // Help
        Action::ShowHelp => {
            help::show_help(app);
            None
        }
        Action::CloseHelp => {
            help::close_help(app);
            None
        }
    };
    Ok(job)
}

// Enter goes to an open prompt first, then to the screen's own input.
fn submit(app: &mut AppState) -> Option<Job> {
    if app.prompt.is_some() {
        credentials::confirm_prompt(app);
        return None;
    }
    match app.view_state() {
        crate::app::ViewState::Input => generation::start_generation(app),
        crate::app::ViewState::EditImage => generation::start_edit(app),
        _ => None,
    }
}
