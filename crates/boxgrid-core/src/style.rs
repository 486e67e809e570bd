#![forbid(unsafe_code)]

//! Style vocabulary shared by layout and rendering.
//!
//! Every enum accepts a few spellings through `parse`, has a canonical
//! `as_str`, and fails fast through `FromStr` with a [`ParseError`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Strength of a border line.
///
/// Ordered so that merging two requests is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BorderWeight {
    /// No line; the border gap may collapse to zero width.
    None,
    /// Regular line.
    #[default]
    Normal,
    /// Heavy (single-line styles) or double (double-line style) line.
    Bold,
}

impl BorderWeight {
    /// All weights in ascending order.
    pub const ALL: [BorderWeight; 3] = [BorderWeight::None, BorderWeight::Normal, BorderWeight::Bold];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" | "0" => Some(Self::None),
            "normal" | "light" | "thin" | "1" => Some(Self::Normal),
            "bold" | "heavy" | "thick" | "2" => Some(Self::Bold),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    /// Whether a line is drawn at all.
    #[inline]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for BorderWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderWeight {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::new("border weight", s, "none|normal|bold"))
    }
}

/// Glyph family used to draw borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// `+`, `-`, `|` and friends.
    #[default]
    Ascii,
    /// Light and heavy box-drawing lines (U+2500 block).
    UnicodeSingle,
    /// Single and double box-drawing lines (U+2550 block).
    ///
    /// `Normal` borders draw single lines and only `Bold` borders draw
    /// double lines, so with default borders this renders like
    /// [`BorderStyle::UnicodeSingle`].
    UnicodeDouble,
}

impl BorderStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ascii" | "a" => Some(Self::Ascii),
            "single" | "unicode" | "unicode-single" | "unicode_single" | "unicodesingle" => {
                Some(Self::UnicodeSingle)
            }
            "double" | "unicode-double" | "unicode_double" | "unicodedouble" => {
                Some(Self::UnicodeDouble)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::UnicodeSingle => "single",
            Self::UnicodeDouble => "double",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::new("border style", s, "ascii|single|double"))
    }
}

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | "start" => Some(Self::Left),
            "center" | "centre" | "c" | "middle" => Some(Self::Center),
            "right" | "r" | "end" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Offset of content `used` wide inside `available`.
    #[inline]
    pub const fn offset(self, available: usize, used: usize) -> usize {
        let slack = available.saturating_sub(used);
        match self {
            Self::Left => 0,
            Self::Center => slack / 2,
            Self::Right => slack,
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalAlignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| ParseError::new("horizontal alignment", s, "left|center|right"))
    }
}

/// Vertical text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" | "t" | "start" => Some(Self::Top),
            "center" | "centre" | "c" | "middle" => Some(Self::Center),
            "bottom" | "b" | "end" => Some(Self::Bottom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    /// Offset of content `used` tall inside `available`.
    #[inline]
    pub const fn offset(self, available: usize, used: usize) -> usize {
        let slack = available.saturating_sub(used);
        match self {
            Self::Top => 0,
            Self::Center => slack / 2,
            Self::Bottom => slack,
        }
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalAlignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::new("vertical alignment", s, "top|center|bottom"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_ordered_for_max_merge() {
        assert!(BorderWeight::None < BorderWeight::Normal);
        assert!(BorderWeight::Normal < BorderWeight::Bold);
        assert_eq!(
            BorderWeight::Normal.max(BorderWeight::Bold),
            BorderWeight::Bold
        );
        assert!(!BorderWeight::None.is_visible());
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(BorderWeight::parse(" Heavy "), Some(BorderWeight::Bold));
        assert_eq!(BorderStyle::parse("UNICODE"), Some(BorderStyle::UnicodeSingle));
        assert_eq!(BorderStyle::parse("double"), Some(BorderStyle::UnicodeDouble));
        assert_eq!(
            HorizontalAlignment::parse("centre"),
            Some(HorizontalAlignment::Center)
        );
        assert_eq!(VerticalAlignment::parse("b"), Some(VerticalAlignment::Bottom));
    }

    #[test]
    fn from_str_fails_fast_on_unknown_names() {
        let err = "rounded".parse::<BorderStyle>().unwrap_err();
        assert_eq!(err.kind, "border style");
        assert_eq!(err.value, "rounded");
        assert!("diagonal".parse::<HorizontalAlignment>().is_err());
        assert!("sideways".parse::<VerticalAlignment>().is_err());
        assert!("3".parse::<BorderWeight>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for style in [
            BorderStyle::Ascii,
            BorderStyle::UnicodeSingle,
            BorderStyle::UnicodeDouble,
        ] {
            assert_eq!(style.to_string().parse::<BorderStyle>(), Ok(style));
        }
        for weight in BorderWeight::ALL {
            assert_eq!(weight.to_string().parse::<BorderWeight>(), Ok(weight));
        }
    }

    #[test]
    fn alignment_offsets() {
        assert_eq!(HorizontalAlignment::Left.offset(10, 4), 0);
        assert_eq!(HorizontalAlignment::Center.offset(10, 3), 3);
        assert_eq!(HorizontalAlignment::Right.offset(10, 4), 6);
        assert_eq!(HorizontalAlignment::Right.offset(2, 4), 0);
        assert_eq!(VerticalAlignment::Center.offset(5, 2), 1);
        assert_eq!(VerticalAlignment::Bottom.offset(5, 2), 3);
    }
}
