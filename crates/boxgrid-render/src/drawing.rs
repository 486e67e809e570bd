#![forbid(unsafe_code)]

//! Drawing primitives for the canvas.
//!
//! Provides helpers on top of `Canvas::set()` / `Canvas::set_stroke()` so the
//! table painter can draw strokes, junctions, and text without duplicating
//! low-level cell loops. Stroke and junction helpers go through
//! `set_stroke`, so a weaker line never replaces a stronger one.

use boxgrid_core::geometry::{Rect, Sides};
use boxgrid_core::style::{BorderStyle, BorderWeight};

use crate::canvas::{Canvas, Cell, CellContent};
use crate::char_width;
use crate::glyphs::{StrokeChars, junction_glyph};

/// Extension trait for drawing on a Canvas.
pub trait Draw {
    /// Draw a horizontal stroke of `width` cells starting at (x, y).
    fn draw_horizontal_stroke(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        weight: BorderWeight,
        chars: StrokeChars,
    );

    /// Draw a vertical stroke of `height` cells starting at (x, y).
    fn draw_vertical_stroke(
        &mut self,
        x: usize,
        y: usize,
        height: usize,
        weight: BorderWeight,
        chars: StrokeChars,
    );

    /// Draw the junction glyph for `arms` at (x, y).
    ///
    /// The junction is painted at the weight of its strongest arm.
    fn draw_junction(&mut self, x: usize, y: usize, arms: Sides<BorderWeight>, style: BorderStyle);

    /// Fill a rectangle with blank background cells.
    fn clear_rect(&mut self, rect: Rect);

    /// Print text with a right-side clipping boundary.
    ///
    /// Stops at `max_x` (exclusive) or the canvas edge. Zero-width characters
    /// are skipped and a wide character that would straddle the boundary is
    /// not started. Returns the x position after the last character.
    fn print_text_clipped(&mut self, x: usize, y: usize, text: &str, max_x: usize) -> usize;
}

impl Draw for Canvas {
    fn draw_horizontal_stroke(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        weight: BorderWeight,
        chars: StrokeChars,
    ) {
        let cell = Cell::stroke(chars.horizontal(weight), weight);
        for i in 0..width {
            self.set_stroke(x + i, y, cell);
        }
    }

    fn draw_vertical_stroke(
        &mut self,
        x: usize,
        y: usize,
        height: usize,
        weight: BorderWeight,
        chars: StrokeChars,
    ) {
        let cell = Cell::stroke(chars.vertical(weight), weight);
        for i in 0..height {
            self.set_stroke(x, y + i, cell);
        }
    }

    fn draw_junction(&mut self, x: usize, y: usize, arms: Sides<BorderWeight>, style: BorderStyle) {
        let weight = arms.left.max(arms.top).max(arms.right).max(arms.bottom);
        self.set_stroke(x, y, Cell::stroke(junction_glyph(style, arms), weight));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.fill(rect, Cell::blank());
    }

    fn print_text_clipped(&mut self, x: usize, y: usize, text: &str, max_x: usize) -> usize {
        let max_x = max_x.min(self.width());
        let mut cx = x;
        for c in text.chars() {
            let width = char_width(c);
            if width == 0 {
                continue;
            }

            if cx >= max_x {
                break;
            }

            // Don't start a wide char if it won't fit
            if cx + width > max_x {
                break;
            }

            self.set(
                cx,
                y,
                Cell {
                    content: CellContent::Char(c),
                    weight: BorderWeight::None,
                },
            );
            cx += width;
        }
        cx
    }
}
