#![forbid(unsafe_code)]

//! Border glyph tables.
//!
//! Strokes are looked up by style and weight. Junctions (the character
//! drawn where up to four strokes meet) are looked up by style and the
//! `(left, top, right, bottom)` arm weights. The Unicode junction tables are
//! closed: every one of the 81 weight combinations has an explicit entry.

use boxgrid_core::geometry::Sides;
use boxgrid_core::style::{BorderStyle, BorderWeight};

use BorderWeight as W;

/// Characters used to draw straight border strokes.
///
/// Index by weight through [`StrokeChars::horizontal`] and
/// [`StrokeChars::vertical`]; `None` strokes are blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeChars {
    pub horizontal_normal: char,
    pub horizontal_bold: char,
    pub vertical_normal: char,
    pub vertical_bold: char,
}

impl StrokeChars {
    /// ASCII-only strokes.
    pub const ASCII: Self = Self {
        horizontal_normal: '-',
        horizontal_bold: '=',
        vertical_normal: '|',
        vertical_bold: '#',
    };

    /// Light and heavy box-drawing strokes.
    pub const SINGLE: Self = Self {
        horizontal_normal: '─',
        horizontal_bold: '━',
        vertical_normal: '│',
        vertical_bold: '┃',
    };

    /// Single and double box-drawing strokes.
    pub const DOUBLE: Self = Self {
        horizontal_normal: '─',
        horizontal_bold: '═',
        vertical_normal: '│',
        vertical_bold: '║',
    };

    /// Stroke set for a border style.
    #[must_use]
    pub const fn for_style(style: BorderStyle) -> Self {
        match style {
            BorderStyle::Ascii => Self::ASCII,
            BorderStyle::UnicodeSingle => Self::SINGLE,
            BorderStyle::UnicodeDouble => Self::DOUBLE,
        }
    }

    #[inline]
    pub const fn horizontal(&self, weight: BorderWeight) -> char {
        match weight {
            W::None => ' ',
            W::Normal => self.horizontal_normal,
            W::Bold => self.horizontal_bold,
        }
    }

    #[inline]
    pub const fn vertical(&self, weight: BorderWeight) -> char {
        match weight {
            W::None => ' ',
            W::Normal => self.vertical_normal,
            W::Bold => self.vertical_bold,
        }
    }
}

/// Junction glyph for the arms meeting at a border point.
#[must_use]
pub fn junction_glyph(style: BorderStyle, arms: Sides<BorderWeight>) -> char {
    match style {
        BorderStyle::Ascii => ascii_junction(arms),
        BorderStyle::UnicodeSingle => single_junction(arms),
        BorderStyle::UnicodeDouble => double_junction(arms),
    }
}

/// ASCII junctions: blank, a plain stroke when only one axis is present,
/// `+` where axes cross or turn.
#[must_use]
pub fn ascii_junction(arms: Sides<BorderWeight>) -> char {
    let horizontal = arms.left.max(arms.right);
    let vertical = arms.top.max(arms.bottom);
    match (horizontal.is_visible(), vertical.is_visible()) {
        (false, false) => ' ',
        (true, false) => StrokeChars::ASCII.horizontal(horizontal),
        (false, true) => StrokeChars::ASCII.vertical(vertical),
        (true, true) => '+',
    }
}

/// Light/heavy junctions. Normal arms are light, Bold arms are heavy.
#[must_use]
pub fn single_junction(arms: Sides<BorderWeight>) -> char {
    match (arms.left, arms.top, arms.right, arms.bottom) {
        (W::None, W::None, W::None, W::None) => ' ',
        (W::None, W::None, W::None, W::Normal) => '╷',
        (W::None, W::None, W::None, W::Bold) => '╻',
        (W::None, W::None, W::Normal, W::None) => '╶',
        (W::None, W::None, W::Normal, W::Normal) => '┌',
        (W::None, W::None, W::Normal, W::Bold) => '┎',
        (W::None, W::None, W::Bold, W::None) => '╺',
        (W::None, W::None, W::Bold, W::Normal) => '┍',
        (W::None, W::None, W::Bold, W::Bold) => '┏',
        (W::None, W::Normal, W::None, W::None) => '╵',
        (W::None, W::Normal, W::None, W::Normal) => '│',
        (W::None, W::Normal, W::None, W::Bold) => '╽',
        (W::None, W::Normal, W::Normal, W::None) => '└',
        (W::None, W::Normal, W::Normal, W::Normal) => '├',
        (W::None, W::Normal, W::Normal, W::Bold) => '┟',
        (W::None, W::Normal, W::Bold, W::None) => '┕',
        (W::None, W::Normal, W::Bold, W::Normal) => '┝',
        (W::None, W::Normal, W::Bold, W::Bold) => '┢',
        (W::None, W::Bold, W::None, W::None) => '╹',
        (W::None, W::Bold, W::None, W::Normal) => '╿',
        (W::None, W::Bold, W::None, W::Bold) => '┃',
        (W::None, W::Bold, W::Normal, W::None) => '┖',
        (W::None, W::Bold, W::Normal, W::Normal) => '┞',
        (W::None, W::Bold, W::Normal, W::Bold) => '┠',
        (W::None, W::Bold, W::Bold, W::None) => '┗',
        (W::None, W::Bold, W::Bold, W::Normal) => '┡',
        (W::None, W::Bold, W::Bold, W::Bold) => '┣',
        (W::Normal, W::None, W::None, W::None) => '╴',
        (W::Normal, W::None, W::None, W::Normal) => '┐',
        (W::Normal, W::None, W::None, W::Bold) => '┒',
        (W::Normal, W::None, W::Normal, W::None) => '─',
        (W::Normal, W::None, W::Normal, W::Normal) => '┬',
        (W::Normal, W::None, W::Normal, W::Bold) => '┰',
        (W::Normal, W::None, W::Bold, W::None) => '╼',
        (W::Normal, W::None, W::Bold, W::Normal) => '┮',
        (W::Normal, W::None, W::Bold, W::Bold) => '┲',
        (W::Normal, W::Normal, W::None, W::None) => '┘',
        (W::Normal, W::Normal, W::None, W::Normal) => '┤',
        (W::Normal, W::Normal, W::None, W::Bold) => '┧',
        (W::Normal, W::Normal, W::Normal, W::None) => '┴',
        (W::Normal, W::Normal, W::Normal, W::Normal) => '┼',
        (W::Normal, W::Normal, W::Normal, W::Bold) => '╁',
        (W::Normal, W::Normal, W::Bold, W::None) => '┶',
        (W::Normal, W::Normal, W::Bold, W::Normal) => '┾',
        (W::Normal, W::Normal, W::Bold, W::Bold) => '╆',
        (W::Normal, W::Bold, W::None, W::None) => '┚',
        (W::Normal, W::Bold, W::None, W::Normal) => '┦',
        (W::Normal, W::Bold, W::None, W::Bold) => '┨',
        (W::Normal, W::Bold, W::Normal, W::None) => '┸',
        (W::Normal, W::Bold, W::Normal, W::Normal) => '╀',
        (W::Normal, W::Bold, W::Normal, W::Bold) => '╂',
        (W::Normal, W::Bold, W::Bold, W::None) => '┺',
        (W::Normal, W::Bold, W::Bold, W::Normal) => '╄',
        (W::Normal, W::Bold, W::Bold, W::Bold) => '╊',
        (W::Bold, W::None, W::None, W::None) => '╸',
        (W::Bold, W::None, W::None, W::Normal) => '┑',
        (W::Bold, W::None, W::None, W::Bold) => '┓',
        (W::Bold, W::None, W::Normal, W::None) => '╾',
        (W::Bold, W::None, W::Normal, W::Normal) => '┭',
        (W::Bold, W::None, W::Normal, W::Bold) => '┱',
        (W::Bold, W::None, W::Bold, W::None) => '━',
        (W::Bold, W::None, W::Bold, W::Normal) => '┯',
        (W::Bold, W::None, W::Bold, W::Bold) => '┳',
        (W::Bold, W::Normal, W::None, W::None) => '┙',
        (W::Bold, W::Normal, W::None, W::Normal) => '┥',
        (W::Bold, W::Normal, W::None, W::Bold) => '┪',
        (W::Bold, W::Normal, W::Normal, W::None) => '┵',
        (W::Bold, W::Normal, W::Normal, W::Normal) => '┽',
        (W::Bold, W::Normal, W::Normal, W::Bold) => '╅',
        (W::Bold, W::Normal, W::Bold, W::None) => '┷',
        (W::Bold, W::Normal, W::Bold, W::Normal) => '┿',
        (W::Bold, W::Normal, W::Bold, W::Bold) => '╈',
        (W::Bold, W::Bold, W::None, W::None) => '┛',
        (W::Bold, W::Bold, W::None, W::Normal) => '┩',
        (W::Bold, W::Bold, W::None, W::Bold) => '┫',
        (W::Bold, W::Bold, W::Normal, W::None) => '┹',
        (W::Bold, W::Bold, W::Normal, W::Normal) => '╃',
        (W::Bold, W::Bold, W::Normal, W::Bold) => '╉',
        (W::Bold, W::Bold, W::Bold, W::None) => '┻',
        (W::Bold, W::Bold, W::Bold, W::Normal) => '╇',
        (W::Bold, W::Bold, W::Bold, W::Bold) => '╋',
    }
}

/// Single/double junctions. Normal arms are single, Bold arms are double.
///
/// The double-line block cannot mix weights along one axis and has no
/// half-lines, so those combinations collapse: mixed arms on an axis take
/// the double form, and a lone arm becomes the full line of its axis.
#[must_use]
pub fn double_junction(arms: Sides<BorderWeight>) -> char {
    match (arms.left, arms.top, arms.right, arms.bottom) {
        (W::None, W::None, W::None, W::None) => ' ',
        (W::None, W::None, W::None, W::Normal) => '│',
        (W::None, W::None, W::None, W::Bold) => '║',
        (W::None, W::None, W::Normal, W::None) => '─',
        (W::None, W::None, W::Normal, W::Normal) => '┌',
        (W::None, W::None, W::Normal, W::Bold) => '╓',
        (W::None, W::None, W::Bold, W::None) => '═',
        (W::None, W::None, W::Bold, W::Normal) => '╒',
        (W::None, W::None, W::Bold, W::Bold) => '╔',
        (W::None, W::Normal, W::None, W::None) => '│',
        (W::None, W::Normal, W::None, W::Normal) => '│',
        (W::None, W::Normal, W::None, W::Bold) => '║',
        (W::None, W::Normal, W::Normal, W::None) => '└',
        (W::None, W::Normal, W::Normal, W::Normal) => '├',
        (W::None, W::Normal, W::Normal, W::Bold) => '╟',
        (W::None, W::Normal, W::Bold, W::None) => '╘',
        (W::None, W::Normal, W::Bold, W::Normal) => '╞',
        (W::None, W::Normal, W::Bold, W::Bold) => '╠',
        (W::None, W::Bold, W::None, W::None) => '║',
        (W::None, W::Bold, W::None, W::Normal) => '║',
        (W::None, W::Bold, W::None, W::Bold) => '║',
        (W::None, W::Bold, W::Normal, W::None) => '╙',
        (W::None, W::Bold, W::Normal, W::Normal) => '╟',
        (W::None, W::Bold, W::Normal, W::Bold) => '╟',
        (W::None, W::Bold, W::Bold, W::None) => '╚',
        (W::None, W::Bold, W::Bold, W::Normal) => '╠',
        (W::None, W::Bold, W::Bold, W::Bold) => '╠',
        (W::Normal, W::None, W::None, W::None) => '─',
        (W::Normal, W::None, W::None, W::Normal) => '┐',
        (W::Normal, W::None, W::None, W::Bold) => '╖',
        (W::Normal, W::None, W::Normal, W::None) => '─',
        (W::Normal, W::None, W::Normal, W::Normal) => '┬',
        (W::Normal, W::None, W::Normal, W::Bold) => '╥',
        (W::Normal, W::None, W::Bold, W::None) => '═',
        (W::Normal, W::None, W::Bold, W::Normal) => '╤',
        (W::Normal, W::None, W::Bold, W::Bold) => '╦',
        (W::Normal, W::Normal, W::None, W::None) => '┘',
        (W::Normal, W::Normal, W::None, W::Normal) => '┤',
        (W::Normal, W::Normal, W::None, W::Bold) => '╢',
        (W::Normal, W::Normal, W::Normal, W::None) => '┴',
        (W::Normal, W::Normal, W::Normal, W::Normal) => '┼',
        (W::Normal, W::Normal, W::Normal, W::Bold) => '╫',
        (W::Normal, W::Normal, W::Bold, W::None) => '╧',
        (W::Normal, W::Normal, W::Bold, W::Normal) => '╪',
        (W::Normal, W::Normal, W::Bold, W::Bold) => '╬',
        (W::Normal, W::Bold, W::None, W::None) => '╜',
        (W::Normal, W::Bold, W::None, W::Normal) => '╢',
        (W::Normal, W::Bold, W::None, W::Bold) => '╢',
        (W::Normal, W::Bold, W::Normal, W::None) => '╨',
        (W::Normal, W::Bold, W::Normal, W::Normal) => '╫',
        (W::Normal, W::Bold, W::Normal, W::Bold) => '╫',
        (W::Normal, W::Bold, W::Bold, W::None) => '╩',
        (W::Normal, W::Bold, W::Bold, W::Normal) => '╬',
        (W::Normal, W::Bold, W::Bold, W::Bold) => '╬',
        (W::Bold, W::None, W::None, W::None) => '═',
        (W::Bold, W::None, W::None, W::Normal) => '╕',
        (W::Bold, W::None, W::None, W::Bold) => '╗',
        (W::Bold, W::None, W::Normal, W::None) => '═',
        (W::Bold, W::None, W::Normal, W::Normal) => '╤',
        (W::Bold, W::None, W::Normal, W::Bold) => '╦',
        (W::Bold, W::None, W::Bold, W::None) => '═',
        (W::Bold, W::None, W::Bold, W::Normal) => '╤',
        (W::Bold, W::None, W::Bold, W::Bold) => '╦',
        (W::Bold, W::Normal, W::None, W::None) => '╛',
        (W::Bold, W::Normal, W::None, W::Normal) => '╡',
        (W::Bold, W::Normal, W::None, W::Bold) => '╣',
        (W::Bold, W::Normal, W::Normal, W::None) => '╧',
        (W::Bold, W::Normal, W::Normal, W::Normal) => '╪',
        (W::Bold, W::Normal, W::Normal, W::Bold) => '╬',
        (W::Bold, W::Normal, W::Bold, W::None) => '╧',
        (W::Bold, W::Normal, W::Bold, W::Normal) => '╪',
        (W::Bold, W::Normal, W::Bold, W::Bold) => '╬',
        (W::Bold, W::Bold, W::None, W::None) => '╝',
        (W::Bold, W::Bold, W::None, W::Normal) => '╣',
        (W::Bold, W::Bold, W::None, W::Bold) => '╣',
        (W::Bold, W::Bold, W::Normal, W::None) => '╩',
        (W::Bold, W::Bold, W::Normal, W::Normal) => '╬',
        (W::Bold, W::Bold, W::Normal, W::Bold) => '╬',
        (W::Bold, W::Bold, W::Bold, W::None) => '╩',
        (W::Bold, W::Bold, W::Bold, W::Normal) => '╬',
        (W::Bold, W::Bold, W::Bold, W::Bold) => '╬',
    }
}
