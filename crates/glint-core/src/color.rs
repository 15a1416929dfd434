//! Named foreground colors
//!
//! The sixteen names map onto the eight ANSI foreground codes (30-37),
//! with the `light_*` / `dark_gray` / `yellow` / `white` variants using the
//! bold prefix (`1;`) the way classic shell prompts spell them.

use serde::{Deserialize, Serialize};

/// A named foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    DarkGray,
    Blue,
    LightBlue,
    Green,
    LightGreen,
    Cyan,
    LightCyan,
    Red,
    LightRed,
    Purple,
    LightPurple,
    Brown,
    Yellow,
    LightGray,
    White,
}

impl Color {
    /// Every color, in registry order
    pub const ALL: [Color; 16] = [
        Self::Black,
        Self::DarkGray,
        Self::Blue,
        Self::LightBlue,
        Self::Green,
        Self::LightGreen,
        Self::Cyan,
        Self::LightCyan,
        Self::Red,
        Self::LightRed,
        Self::Purple,
        Self::LightPurple,
        Self::Brown,
        Self::Yellow,
        Self::LightGray,
        Self::White,
    ];

    /// Look up a color by its symbolic name.
    ///
    /// Names are matched exactly; anything not in the table is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Self::Black),
            "dark_gray" => Some(Self::DarkGray),
            "blue" => Some(Self::Blue),
            "light_blue" => Some(Self::LightBlue),
            "green" => Some(Self::Green),
            "light_green" => Some(Self::LightGreen),
            "cyan" => Some(Self::Cyan),
            "light_cyan" => Some(Self::LightCyan),
            "red" => Some(Self::Red),
            "light_red" => Some(Self::LightRed),
            "purple" => Some(Self::Purple),
            "light_purple" => Some(Self::LightPurple),
            "brown" => Some(Self::Brown),
            "yellow" => Some(Self::Yellow),
            "light_gray" => Some(Self::LightGray),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    /// Symbolic name of this color
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::LightBlue => "light_blue",
            Self::Green => "green",
            Self::LightGreen => "light_green",
            Self::Cyan => "cyan",
            Self::LightCyan => "light_cyan",
            Self::Red => "red",
            Self::LightRed => "light_red",
            Self::Purple => "purple",
            Self::LightPurple => "light_purple",
            Self::Brown => "brown",
            Self::Yellow => "yellow",
            Self::LightGray => "light_gray",
            Self::White => "white",
        }
    }

    /// SGR parameter string (the part between `ESC[` and `m`)
    pub fn sgr(self) -> &'static str {
        match self {
            Self::Black => "30",
            Self::DarkGray => "1;30",
            Self::Blue => "34",
            Self::LightBlue => "1;34",
            Self::Green => "32",
            Self::LightGreen => "1;32",
            Self::Cyan => "36",
            Self::LightCyan => "1;36",
            Self::Red => "31",
            Self::LightRed => "1;31",
            Self::Purple => "35",
            Self::LightPurple => "1;35",
            Self::Brown => "33",
            Self::Yellow => "1;33",
            Self::LightGray => "37",
            Self::White => "1;37",
        }
    }

    /// Check if this is one of the bold-prefixed (bright) variants
    pub fn is_bright(self) -> bool {
        self.sgr().starts_with("1;")
    }
}

/// Resolve a color name straight to its SGR parameter
pub fn resolve_color(name: &str) -> Option<&'static str> {
    Color::from_name(name).map(Color::sgr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_known_params() {
        assert_eq!(resolve_color("black"), Some("30"));
        assert_eq!(resolve_color("red"), Some("31"));
        assert_eq!(resolve_color("light_red"), Some("1;31"));
        assert_eq!(resolve_color("brown"), Some("33"));
        assert_eq!(resolve_color("yellow"), Some("1;33"));
        assert_eq!(resolve_color("light_gray"), Some("37"));
        assert_eq!(resolve_color("white"), Some("1;37"));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(resolve_color("magenta"), None);
        assert_eq!(resolve_color("Red"), None);
        assert_eq!(resolve_color(""), None);
    }

    #[test]
    fn test_bright_variants() {
        assert!(Color::LightBlue.is_bright());
        assert!(Color::DarkGray.is_bright());
        assert!(!Color::Blue.is_bright());
        assert_eq!(Color::ALL.iter().filter(|c| c.is_bright()).count(), 8);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Color::LightPurple).unwrap();
        assert_eq!(json, "\"light_purple\"");
        let back: Color = serde_json::from_str("\"dark_gray\"").unwrap();
        assert_eq!(back, Color::DarkGray);
    }
}
