#![forbid(unsafe_code)]

//! Canvas grid storage.
//!
//! The `Canvas` is a 2D grid of [`Cell`]s that a table is painted onto
//! before being serialized to text.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A `Continuation` cell always follows a wide `Char` head on the same row
//! 4. A stroke never replaces a cell painted with a heavier stroke

use boxgrid_core::geometry::Rect;
use boxgrid_core::style::BorderWeight;

use crate::char_width;

/// What a canvas cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Never painted; serializes as a space.
    #[default]
    Empty,
    /// A character. Wide characters are followed by a `Continuation`.
    Char(char),
    /// Trailing column of a wide character; serializes as nothing.
    Continuation,
}

impl CellContent {
    /// The displayed character, if any.
    #[inline]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Columns this content occupies (0 for continuations).
    #[inline]
    pub fn width(self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Char(c) => char_width(c).max(1),
            Self::Continuation => 0,
        }
    }
}

/// A single canvas cell.
///
/// `weight` records the border weight the content was painted with, so
/// weaker strokes can yield to stronger ones. Text and background use
/// [`BorderWeight::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    pub weight: BorderWeight,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: CellContent::Empty,
            weight: BorderWeight::None,
        }
    }
}

impl Cell {
    /// A plain (non-border) cell showing `c`.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            weight: BorderWeight::None,
        }
    }

    /// A border cell showing `c`, painted at `weight`.
    #[inline]
    pub const fn stroke(c: char, weight: BorderWeight) -> Self {
        Self {
            content: CellContent::Char(c),
            weight,
        }
    }

    /// A blank background cell.
    #[inline]
    pub const fn blank() -> Self {
        Self::from_char(' ')
    }

    #[inline]
    pub const fn is_continuation(&self) -> bool {
        matches!(self.content, CellContent::Continuation)
    }
}

/// A 2D grid of canvas cells.
///
/// # Example
///
/// ```
/// use boxgrid_render::canvas::{Canvas, Cell};
///
/// let mut canvas = Canvas::new(2, 1);
/// canvas.set(0, 0, Cell::from_char('H'));
/// canvas.set(1, 0, Cell::from_char('i'));
/// assert_eq!(canvas.to_text("\n"), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a new canvas with the given dimensions, filled with empty cells.
    ///
    /// A zero dimension yields a canvas with no cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Canvas width in cells.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in cells.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding rect of the entire canvas.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Clear any wide character the write at (x, y) would split.
    fn cleanup_overlap(&mut self, x: usize, y: usize) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        if current.content.width() > 1 {
            if let Some(tail) = self.index(x + 1, y)
                && self.cells[tail].is_continuation()
            {
                self.cells[tail] = Cell::default();
            }
        } else if current.is_continuation() && x > 0 {
            if let Some(head) = self.index(x - 1, y) {
                self.cells[head] = Cell::default();
            }
        }
    }

    /// Write a cell at (x, y), ignoring out-of-bounds positions.
    ///
    /// A wide character also claims (x + 1, y); it is dropped entirely if
    /// that column is outside the canvas.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let Some(idx) = self.index(x, y) else { return };
        let width = cell.content.width();
        if width > 1 && x + 1 >= self.width {
            return;
        }

        self.cleanup_overlap(x, y);
        if width > 1 {
            self.cleanup_overlap(x + 1, y);
        }
        self.cells[idx] = cell;

        if width > 1 {
            self.cells[idx + 1] = Cell {
                content: CellContent::Continuation,
                weight: cell.weight,
            };
        }
    }

    /// Write a border cell unless a heavier border already occupies (x, y).
    ///
    /// Returns whether the cell was written.
    pub fn set_stroke(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.get(x, y) {
            Some(existing) if existing.weight > cell.weight => false,
            Some(_) => {
                self.set(x, y, cell);
                true
            }
            None => false,
        }
    }

    /// Fill a rectangular region with the given cell, clipped to the canvas.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.set(x, y, cell);
            }
        }
    }

    /// Slice of the cells in row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_cells(&self, y: usize) -> &[Cell] {
        assert!(y < self.height, "row {y} out of bounds");
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Serialize row `y`. Empty cells become spaces; continuations vanish.
    pub fn row_text(&self, y: usize) -> String {
        let mut line = String::with_capacity(self.width);
        for cell in self.row_cells(y) {
            match cell.content {
                CellContent::Empty => line.push(' '),
                CellContent::Char(c) => line.push(c),
                CellContent::Continuation => {}
            }
        }
        line
    }

    /// Serialize all rows, joined by `line_ending` with no trailing terminator.
    pub fn to_text(&self, line_ending: &str) -> String {
        let mut out = String::with_capacity((self.width + line_ending.len()) * self.height);
        for y in 0..self.height {
            if y > 0 {
                out.push_str(line_ending);
            }
            out.push_str(&self.row_text(y));
        }
        out
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
