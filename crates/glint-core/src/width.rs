//! Display width of terminal text
//!
//! Wide characters (East-Asian full-width, most emoji) occupy two columns.
//! Combining-heavy scripts such as Devanagari are measured however
//! `unicode-width` reports them, which may not match every terminal.

use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `text` occupies
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Right-pad `text` with spaces until it is `width` columns wide
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(current));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    out
}
