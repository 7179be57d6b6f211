use crate::app::AppState;

pub fn show_help(app: &mut AppState) {
    app.show_help = true;
}

pub fn close_help(app: &mut AppState) {
    app.show_help = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::studio::KeyRing;
    use std::sync::Arc;

    fn create_test_app() -> AppState {
        let config = AppConfig::default();
        AppState::new(config, Arc::new(KeyRing::default()))
    }

    #[test]
    fn test_help_overlay() {
        let mut app = create_test_app();

        show_help(&mut app);
        assert!(app.show_help);

        close_help(&mut app);
        assert!(!app.show_help);
    }
}
