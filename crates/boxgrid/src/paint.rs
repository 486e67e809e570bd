#![forbid(unsafe_code)]

//! Painting a [`Layout`] onto a character canvas.
//!
//! Each cell is painted in a fixed order: blank interior, aligned text,
//! edge strokes (with junctions where an edge crosses a border line inside
//! its span), then the four corner junctions. Strokes and junctions are
//! written through `set_stroke`, so painting order between neighbours never
//! lets a lighter line hide a heavier one.

use boxgrid_core::geometry::Rect;
use boxgrid_core::style::BorderStyle;
use boxgrid_render::canvas::Canvas;
use boxgrid_render::display_width;
use boxgrid_render::drawing::Draw;
use boxgrid_render::glyphs::StrokeChars;

use crate::cell::ResolvedCell;
use crate::layout::{Footprint, Layout};

/// Absolute canvas offsets of every boundary and track.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Offsets {
    /// Position of each boundary, `tracks + 1` entries.
    boundary: Vec<usize>,
    /// First position of each track.
    content: Vec<usize>,
    total: usize,
}

impl Offsets {
    fn new(sizes: &[usize], gaps: &[usize]) -> Self {
        debug_assert_eq!(gaps.len(), sizes.len() + 1);
        let mut boundary = Vec::with_capacity(sizes.len() + 1);
        let mut content = Vec::with_capacity(sizes.len());
        let mut at = 0;
        for (size, gap) in sizes.iter().zip(gaps) {
            boundary.push(at);
            content.push(at + gap);
            at += gap + size;
        }
        boundary.push(at);
        let total = at + gaps.last().copied().unwrap_or(0);
        Self {
            boundary,
            content,
            total,
        }
    }
}

/// Paint `layout` in `style`. An empty layout yields an empty canvas.
pub fn paint(layout: &Layout, style: BorderStyle) -> Canvas {
    let xs = Offsets::new(layout.column_widths(), layout.col_gaps());
    let ys = Offsets::new(layout.row_heights(), layout.row_gaps());

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("canvas_paint", width = xs.total, height = ys.total);
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut canvas = Canvas::new(xs.total, ys.total);
    let painter = Painter {
        layout,
        style,
        chars: StrokeChars::for_style(style),
        xs: &xs,
        ys: &ys,
    };
    for (cell, f) in layout.cells().iter().zip(layout.footprints()) {
        painter.paint_cell(&mut canvas, cell, f);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(cells = layout.cells().len(), "canvas painted");

    canvas
}

struct Painter<'a> {
    layout: &'a Layout,
    style: BorderStyle,
    chars: StrokeChars,
    xs: &'a Offsets,
    ys: &'a Offsets,
}

impl Painter<'_> {
    fn paint_cell(&self, canvas: &mut Canvas, cell: &ResolvedCell, f: &Footprint) {
        let interior = Rect::from_edges(
            self.xs.content[f.col],
            self.ys.content[f.row],
            self.xs.boundary[f.right()],
            self.ys.boundary[f.bottom()],
        );
        canvas.clear_rect(interior);
        self.paint_text(canvas, cell, interior);

        let col_gaps = self.layout.col_gaps();
        let row_gaps = self.layout.row_gaps();
        for col_boundary in [f.col, f.right()] {
            if col_gaps[col_boundary] > 0 {
                self.paint_vertical_edge(canvas, f, col_boundary);
            }
        }
        for row_boundary in [f.row, f.bottom()] {
            if row_gaps[row_boundary] > 0 {
                self.paint_horizontal_edge(canvas, f, row_boundary);
            }
        }
        for row_boundary in [f.row, f.bottom()] {
            for col_boundary in [f.col, f.right()] {
                if row_gaps[row_boundary] > 0 && col_gaps[col_boundary] > 0 {
                    self.paint_junction(canvas, row_boundary, col_boundary);
                }
            }
        }
    }

    fn paint_text(&self, canvas: &mut Canvas, cell: &ResolvedCell, interior: Rect) {
        let area = interior.inner(cell.margin);
        if area.is_empty() {
            return;
        }
        let top = area.y + cell.v_align.offset(area.height, cell.lines.len());
        for (i, line) in cell.lines.iter().enumerate() {
            let y = top + i;
            if y >= area.bottom() {
                break;
            }
            let x = area.x + cell.h_align.offset(area.width, display_width(line));
            canvas.print_text_clipped(x, y, line, area.right());
        }
    }

    fn paint_vertical_edge(&self, canvas: &mut Canvas, f: &Footprint, col_boundary: usize) {
        let x = self.xs.boundary[col_boundary];
        let borders = self.layout.borders();
        let heights = self.layout.row_heights();
        for row in f.rows() {
            canvas.draw_vertical_stroke(
                x,
                self.ys.content[row],
                heights[row],
                borders.vertical(row, col_boundary),
                self.chars,
            );
        }
        for row_boundary in f.row + 1..f.bottom() {
            if self.layout.row_gaps()[row_boundary] > 0 {
                self.paint_junction(canvas, row_boundary, col_boundary);
            }
        }
    }

    fn paint_horizontal_edge(&self, canvas: &mut Canvas, f: &Footprint, row_boundary: usize) {
        let y = self.ys.boundary[row_boundary];
        let borders = self.layout.borders();
        let widths = self.layout.column_widths();
        for col in f.cols() {
            canvas.draw_horizontal_stroke(
                self.xs.content[col],
                y,
                widths[col],
                borders.horizontal(row_boundary, col),
                self.chars,
            );
        }
        for col_boundary in f.col + 1..f.right() {
            if self.layout.col_gaps()[col_boundary] > 0 {
                self.paint_junction(canvas, row_boundary, col_boundary);
            }
        }
    }

    fn paint_junction(&self, canvas: &mut Canvas, row_boundary: usize, col_boundary: usize) {
        canvas.draw_junction(
            self.xs.boundary[col_boundary],
            self.ys.boundary[row_boundary],
            self.layout.borders().junction(row_boundary, col_boundary),
            self.style,
        );
    }
}
