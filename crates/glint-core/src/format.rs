//! Escape-sequence composition
//!
//! Every decoration is a wrap of the form `ESC[<param>m` + content +
//! `ESC[0m`. The color wrap is innermost; styles nest outward in the order
//! given, each adding its own reset.
//!
//! The name-based functions never fail: an unknown name skips that one wrap
//! and leaves the rest of the request intact.

use crate::color::Color;
use crate::style::Style;

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// SGR parameter for crossed-out text
pub const STRIKETHROUGH: &str = "9";

/// Color used by [`format`] when the caller does not name one
pub const DEFAULT_FORMAT_COLOR: Color = Color::Green;

/// Wrap `text` in a single SGR sequence and a reset
pub fn wrap(text: &str, param: &str) -> String {
    format!("{CSI}{param}m{text}{RESET}")
}

/// Apply an optional color and an ordered list of styles
pub fn paint(text: &str, color: Option<Color>, styles: &[Style]) -> String {
    let mut out = match color {
        Some(color) => wrap(text, color.sgr()),
        None => text.to_owned(),
    };
    for style in styles {
        out = wrap(&out, style.sgr());
    }
    out
}

/// Wrap `text` in the named color.
///
/// `None` or an unknown name returns the text unchanged.
pub fn color(text: &str, name: Option<&str>) -> String {
    paint(text, name.and_then(lookup_color), &[])
}

/// Wrap `text` in the named style.
///
/// `None` or an unknown name returns the text unchanged.
pub fn style(text: &str, name: Option<&str>) -> String {
    match name.and_then(lookup_style) {
        Some(style) => wrap(text, style.sgr()),
        None => text.to_owned(),
    }
}

/// Color `text` and then apply `styles` in order, outermost last.
///
/// With `color == None` the text is colored [`DEFAULT_FORMAT_COLOR`].
pub fn format<S: AsRef<str>>(text: &str, color: Option<&str>, styles: &[S]) -> String {
    let color = match color {
        Some(name) => lookup_color(name),
        None => Some(DEFAULT_FORMAT_COLOR),
    };
    let styles: Vec<Style> = styles
        .iter()
        .filter_map(|name| lookup_style(name.as_ref()))
        .collect();
    paint(text, color, &styles)
}

/// Cross out `text`
pub fn strike(text: &str) -> String {
    wrap(text, STRIKETHROUGH)
}

fn lookup_color(name: &str) -> Option<Color> {
    let color = Color::from_name(name);
    if color.is_none() {
        log::debug!("Unknown color name: {:?}", name);
    }
    color
}

fn lookup_style(name: &str) -> Option<Style> {
    let style = Style::from_name(name);
    if style.is_none() {
        log::debug!("Unknown style name: {:?}", name);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_STYLES: &[&str] = &[];

    #[test]
    fn test_color_known() {
        for c in Color::ALL {
            assert_eq!(
                color("text", Some(c.name())),
                format!("\x1b[{}mtext\x1b[0m", c.sgr())
            );
        }
    }

    #[test]
    fn test_color_unknown_passes_through() {
        assert_eq!(color("text", Some("chartreuse")), "text");
        assert_eq!(color("text", None), "text");
    }

    #[test]
    fn test_style_unknown_passes_through() {
        assert_eq!(style("text", Some("italic")), "text");
        assert_eq!(style("text", None), "text");
        assert_eq!(style("text", Some("bold")), "\x1b[1mtext\x1b[0m");
    }

    #[test]
    fn test_format_nesting_order() {
        let nested = style(
            &style(&color("hi", Some("red")), Some("bold")),
            Some("underline"),
        );
        assert_eq!(format("hi", Some("red"), &["bold", "underline"]), nested);
        assert_eq!(
            nested,
            "\x1b[4m\x1b[1m\x1b[31mhi\x1b[0m\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn test_format_default_color() {
        assert_eq!(format("ok", None, NO_STYLES), "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_format_partial_application() {
        assert_eq!(
            format("x", Some("nope"), &["bold", "sparkly"]),
            "\x1b[1mx\x1b[0m"
        );
    }

    #[test]
    fn test_format_is_pure() {
        let a = format("same", Some("cyan"), &["dim"]);
        let b = format("same", Some("cyan"), &["dim"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_strike() {
        assert_eq!(strike("gone"), "\x1b[9mgone\x1b[0m");
        assert_eq!(strike(""), "\x1b[9m\x1b[0m");
    }

    #[test]
    fn test_paint_typed() {
        assert_eq!(
            paint("t", Some(Color::Blue), &[Style::Reverse]),
            "\x1b[7m\x1b[34mt\x1b[0m\x1b[0m"
        );
        assert_eq!(paint("t", None, &[]), "t");
    }
}
