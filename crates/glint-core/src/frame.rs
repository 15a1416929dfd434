//! Box borders around text
//!
//! A frame is derived fresh from the content on every call: its interior is
//! as wide as the widest line (in display columns) and each content row is
//! padded with one space on either side.
//!
//! ```text
//! ┏━━━━┓
//! ┃ ab ┃
//! ┗━━━━┛
//! ```

use crate::width::{display_width, pad_to_width};

/// Glyphs used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl FrameGlyphs {
    /// Heavy box-drawing set: ┏━┓┃┗┛
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// Light box-drawing set: ┌─┐│└┘
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Draw a box around pre-split lines using these glyphs
    pub fn draw<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let inner = lines
            .iter()
            .map(|line| display_width(line.as_ref()))
            .max()
            .unwrap_or(0);
        let run: String = std::iter::repeat(self.horizontal).take(inner + 2).collect();

        let mut rows = Vec::with_capacity(lines.len() + 2);
        rows.push(format!("{}{}{}", self.top_left, run, self.top_right));
        for line in lines {
            rows.push(format!(
                "{v} {} {v}",
                pad_to_width(line.as_ref(), inner),
                v = self.vertical
            ));
        }
        rows.push(format!("{}{}{}", self.bottom_left, run, self.bottom_right));
        rows.join("\n")
    }
}

impl Default for FrameGlyphs {
    fn default() -> Self {
        Self::HEAVY
    }
}

/// Draw a single-row frame around `text`
pub fn frame(text: &str) -> String {
    FrameGlyphs::HEAVY.draw(&[text])
}

/// Draw one frame around every line of `text`, all sharing the widest
/// line's border.
pub fn frame_multi_line(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return frame("");
    }
    FrameGlyphs::HEAVY.draw(&lines)
}
