use crate::app::TextInput;
use crate::ui::constants::CURSOR_INDICATOR;
use unicode_width::UnicodeWidthStr;

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in text.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(current_line);
                current_line = word.to_string();
                current_width = word_width;
            } else {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }

        if lines.is_empty() {
            lines.push(text.to_string());
        }

        lines
    }
}

/// The input's text with the cursor indicator drawn at the cursor position.
pub fn with_cursor(input: &TextInput) -> String {
    let mut display = String::with_capacity(input.buffer.len() + CURSOR_INDICATOR.len_utf8());
    let mut placed = false;
    for (i, c) in input.buffer.chars().enumerate() {
        if i == input.cursor_pos {
            display.push(CURSOR_INDICATOR);
            placed = true;
        }
        display.push(c);
    }
    if !placed {
        display.push(CURSOR_INDICATOR);
    }
    display
}

/// Cuts text to `max_width` columns, ending with an ellipsis when shortened.
pub fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
