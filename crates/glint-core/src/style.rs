//! Named text styles (SGR attributes)

use serde::{Deserialize, Serialize};

/// A named text style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Bold/bright text
    Bold,
    /// Dim/faint text
    Dim,
    /// Underlined text
    Underline,
    /// Blinking text
    Blink,
    /// Reverse video (swap fg/bg)
    Reverse,
    /// Hidden/invisible text
    Hidden,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Self::Bold,
        Self::Dim,
        Self::Underline,
        Self::Blink,
        Self::Reverse,
        Self::Hidden,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "dim" => Some(Self::Dim),
            "underline" => Some(Self::Underline),
            "blink" => Some(Self::Blink),
            "reverse" => Some(Self::Reverse),
            "hidden" => Some(Self::Hidden),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
            Self::Hidden => "hidden",
        }
    }

    pub fn sgr(self) -> &'static str {
        match self {
            Self::Bold => "1",
            Self::Dim => "2",
            Self::Underline => "4",
            Self::Blink => "5",
            Self::Reverse => "7",
            Self::Hidden => "8",
        }
    }
}

/// Resolve a style name straight to its SGR parameter
pub fn resolve_style(name: &str) -> Option<&'static str> {
    Style::from_name(name).map(Style::sgr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_params() {
        assert_eq!(resolve_style("bold"), Some("1"));
        assert_eq!(resolve_style("dim"), Some("2"));
        assert_eq!(resolve_style("underline"), Some("4"));
        assert_eq!(resolve_style("blink"), Some("5"));
        assert_eq!(resolve_style("reverse"), Some("7"));
        assert_eq!(resolve_style("hidden"), Some("8"));
    }

    #[test]
    fn test_from_name_round_trip() {
        for style in Style::ALL {
            assert_eq!(Style::from_name(style.name()), Some(style));
        }
    }

    #[test]
    fn test_unknown_style() {
        assert_eq!(resolve_style("italic"), None);
        assert_eq!(resolve_style("strikethrough"), None);
    }
}
