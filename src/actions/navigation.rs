use crate::app::{AppState, Screen, TextInput};

/// Opens the editor on the original logo.
pub fn edit_logo(app: &mut AppState) {
    if let Screen::Dashboard(workspace) = &app.screen {
        let mut workspace = workspace.clone();
        workspace.reset_to_logo();
        app.screen = Screen::EditImage {
            workspace,
            instruction: TextInput::default(),
        };
        app.clear_message();
    }
}

/// Returns to the dashboard, keeping whatever image is current.
pub fn back_to_dashboard(app: &mut AppState) {
    let workspace = match &app.screen {
        Screen::EditImage { workspace, .. } | Screen::AnimateVideo { workspace, .. } => {
            workspace.clone()
        }
        _ => return,
    };
    app.screen = Screen::Dashboard(workspace);
    app.clear_message();
}

/// Drops the brand and everything derived from it and starts over.
pub fn new_brand(app: &mut AppState) {
    if app.pending_job().is_some() {
        return;
    }
    app.screen = Screen::input(app.last_mission.clone());
    app.saved_images = 0;
    app.clear_message();
}
