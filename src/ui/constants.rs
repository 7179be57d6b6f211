use ratatui::style::Color;

pub const APP_TITLE: &str = "Brand Genesis";
pub const CURSOR_INDICATOR: char = '▌';
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const SWATCH: &str = "      ";

pub const ACCENT: Color = Color::Magenta;
pub const MUTED: Color = Color::Gray;
pub const ERROR: Color = Color::Red;

// Status line hints per screen
pub mod hints {
    pub const INPUT: &str = "⏎ generate  F2 API key  F1 help  Esc quit";
    pub const LOADING: &str = "Working... Ctrl+C quits";
    pub const DASHBOARD: &str =
        "e edit  a animate  s save image  x export  y copy palette  n new brand  ? help  q quit";
    pub const EDITOR: &str = "⏎ apply edit  ^A animate  ^O open image  ^S save  Esc back";
    pub const VIDEO: &str = "s save video  b back  ? help  q quit";
}
