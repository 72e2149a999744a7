//! Display-width aware string helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when
/// shortened.
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(ch);
    }
    result.push(ELLIPSIS);
    result
}

/// Right-pad `text` with spaces to `width` columns.
pub fn pad_to(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// Keep the tail of `text` so it fits in `max_width` characters, marking
/// the cut with a leading `...`.
pub fn truncate_left(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    let take_chars = max_width.saturating_sub(3);
    let tail: String = text.chars().skip(char_count - take_chars).collect();
    format!("...{}", tail)
}
