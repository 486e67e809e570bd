#![forbid(unsafe_code)]

//! Logical cell records.
//!
//! A [`CellSpec`] is what the table stores per coordinate: text plus
//! optional overrides. At render time each alive record is resolved against
//! the table defaults into a [`ResolvedCell`], the only form the layout
//! pipeline sees.

use std::fmt;

use boxgrid_core::geometry::Sides;
use boxgrid_core::style::{BorderWeight, HorizontalAlignment, VerticalAlignment};
use boxgrid_render::display_width;

use crate::config::TableConfig;

/// Logical coordinate of a cell. Ordered row-major.
///
/// This is a placement hint: the layout packs cells into a dense physical
/// grid and never leaves gaps for unused coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stored attributes of one logical cell.
///
/// A record without text is not alive and takes no part in layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSpec {
    pub(crate) text: Option<String>,
    pub(crate) col_span: usize,
    pub(crate) row_span: usize,
    pub(crate) margin: Sides<Option<usize>>,
    pub(crate) borders: Sides<Option<BorderWeight>>,
    pub(crate) h_align: Option<HorizontalAlignment>,
    pub(crate) v_align: Option<VerticalAlignment>,
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            text: None,
            col_span: 1,
            row_span: 1,
            margin: Sides::all(None),
            borders: Sides::all(None),
            h_align: None,
            v_align: None,
        }
    }
}

impl CellSpec {
    /// Whether the cell has text and therefore takes part in layout.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    pub fn row_span(&self) -> usize {
        self.row_span
    }

    /// Margin overrides; `None` sides fall back to the table default.
    pub fn margin_overrides(&self) -> Sides<Option<usize>> {
        self.margin
    }

    /// Border overrides; `None` sides fall back to the table default.
    pub fn border_overrides(&self) -> Sides<Option<BorderWeight>> {
        self.borders
    }

    /// Merge overrides with `config` defaults. Returns `None` when not alive.
    pub fn resolve(&self, pos: CellPos, config: &TableConfig) -> Option<ResolvedCell> {
        let text = self.text.as_deref()?;
        Some(ResolvedCell {
            pos,
            lines: split_lines(text),
            col_span: self.col_span,
            row_span: self.row_span,
            margin: self.margin.resolve(config.margin),
            borders: self.borders.resolve(config.borders),
            h_align: self.h_align.unwrap_or(config.h_align),
            v_align: self.v_align.unwrap_or(config.v_align),
        })
    }
}

/// A logical cell with every attribute concrete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCell {
    pub pos: CellPos,
    pub lines: Vec<String>,
    pub col_span: usize,
    pub row_span: usize,
    pub margin: Sides<usize>,
    pub borders: Sides<BorderWeight>,
    pub h_align: HorizontalAlignment,
    pub v_align: VerticalAlignment,
}

impl ResolvedCell {
    /// A cell with default attributes, for building layouts directly.
    pub fn new(pos: CellPos, text: &str) -> Self {
        Self {
            pos,
            lines: split_lines(text),
            col_span: 1,
            row_span: 1,
            margin: Sides::all(0),
            borders: Sides::all(BorderWeight::Normal),
            h_align: HorizontalAlignment::default(),
            v_align: VerticalAlignment::default(),
        }
    }

    /// Width of the widest text line.
    pub fn text_width(&self) -> usize {
        self.lines.iter().map(|l| display_width(l)).max().unwrap_or(0)
    }

    /// Number of text lines.
    pub fn text_height(&self) -> usize {
        self.lines.len()
    }

    /// Columns the cell needs in total: text plus horizontal margins.
    pub fn required_width(&self) -> usize {
        self.text_width() + self.margin.horizontal_sum()
    }

    /// Rows the cell needs in total: lines plus vertical margins.
    pub fn required_height(&self) -> usize {
        self.text_height() + self.margin.vertical_sum()
    }
}

/// Split on `\n`, dropping one trailing `\r` per line.
///
/// A trailing terminator yields a final empty line, and empty text yields a
/// single empty line.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect()
}
