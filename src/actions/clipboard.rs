use crate::app::AppState;
use clipboard::{ClipboardContext, ClipboardProvider};

/// Puts the brand name, tagline and hex codes on the system clipboard.
pub fn copy_palette(app: &mut AppState) {
    let Some(brand) = app.screen.brand() else {
        return;
    };
    let text = brand.palette_summary();

    // Try to copy to system clipboard
    let copied = ClipboardContext::new()
        .and_then(|mut ctx| ctx.set_contents(text))
        .is_ok();

    if copied {
        app.set_message("Palette copied");
    } else {
        app.set_message("Clipboard unavailable");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::studio::KeyRing;
    use std::sync::Arc;

    #[test]
    fn test_copy_without_brand_does_nothing() {
        let mut app = AppState::new(AppConfig::default(), Arc::new(KeyRing::default()));

        copy_palette(&mut app);
        assert!(app.message.is_none());
    }
}
