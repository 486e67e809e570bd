#![forbid(unsafe_code)]

//! Render kernel: canvas cells, border glyphs, and drawing primitives.

pub mod canvas;
pub mod drawing;
pub mod glyphs;

mod text_width {
    use unicode_width::UnicodeWidthChar;

    #[inline]
    fn ascii_width(text: &str) -> Option<usize> {
        if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            Some(text.len())
        } else {
            None
        }
    }

    /// Columns occupied by `ch` on the canvas. Control characters take none.
    #[inline]
    pub fn char_width(ch: char) -> usize {
        if ch.is_ascii() {
            return match ch {
                ' '..='~' => 1,
                _ => 0,
            };
        }
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }

    /// Columns occupied by a single line of text.
    ///
    /// Always the sum of [`char_width`], so measurement agrees with what
    /// the canvas prints.
    #[inline]
    pub fn display_width(text: &str) -> usize {
        if let Some(width) = ascii_width(text) {
            return width;
        }
        text.chars().map(char_width).sum()
    }

}

pub use text_width::{char_width, display_width};
