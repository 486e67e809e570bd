#![forbid(unsafe_code)]

//! Sparse table of cells and its builder handle.
//!
//! ```
//! use boxgrid::{LineEnding, Table, TableConfig};
//!
//! let mut table = Table::with_config(TableConfig {
//!     line_ending: LineEnding::Lf,
//!     ..TableConfig::default()
//! });
//! table.cell(0, 0).text("a");
//! table.cell(0, 1).text("b");
//! assert_eq!(table.render(), "+---+---+\n| a | b |\n+---+---+");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use boxgrid_core::geometry::{Side, Sides};
use boxgrid_core::style::{BorderWeight, HorizontalAlignment, VerticalAlignment};

use crate::cell::{CellPos, CellSpec, ResolvedCell};
use crate::config::TableConfig;
use crate::error::{Axis, TableError};
use crate::layout::Layout;
use crate::paint::paint;

/// A sparse grid of text cells rendered with box-drawing borders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    cells: BTreeMap<CellPos, CellSpec>,
    config: TableConfig,
}

impl Table {
    /// An empty table with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            cells: BTreeMap::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut TableConfig {
        &mut self.config
    }

    /// Builder handle for the cell at (row, col), creating its record.
    ///
    /// The record stays out of layout until it is given text.
    pub fn cell(&mut self, row: usize, col: usize) -> CellMut<'_> {
        let pos = CellPos::new(row, col);
        CellMut {
            pos,
            spec: self.cells.entry(pos).or_default(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellSpec> {
        self.cells.get(&CellPos::new(row, col))
    }

    /// Delete the cell at (row, col) with all its attributes.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<CellSpec> {
        self.cells.remove(&CellPos::new(row, col))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Whether no cell has text.
    pub fn is_empty(&self) -> bool {
        !self.cells.values().any(CellSpec::is_alive)
    }

    /// Cells that have text, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (CellPos, &CellSpec)> + '_ {
        self.cells
            .iter()
            .filter(|(_, spec)| spec.is_alive())
            .map(|(pos, spec)| (*pos, spec))
    }

    /// Place `texts` in a new logical row below every alive cell.
    ///
    /// Returns the logical row index used.
    pub fn append_row<I, S>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = self.alive_cells().map(|(pos, _)| pos.row + 1).max().unwrap_or(0);
        for (col, text) in texts.into_iter().enumerate() {
            self.cell(row, col).text(text);
        }
        row
    }

    /// Place `texts` in a new logical column right of every alive cell.
    ///
    /// Returns the logical column index used.
    pub fn append_column<I, S>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let col = self.alive_cells().map(|(pos, _)| pos.col + 1).max().unwrap_or(0);
        for (row, text) in texts.into_iter().enumerate() {
            self.cell(row, col).text(text);
        }
        col
    }

    /// Alive cells with table defaults applied, in row-major order.
    pub fn snapshot(&self) -> Vec<ResolvedCell> {
        self.cells
            .iter()
            .filter_map(|(pos, spec)| spec.resolve(*pos, &self.config))
            .collect()
    }

    pub fn layout(&self) -> Layout {
        Layout::compute(self.snapshot())
    }

    /// Render to a string. An empty table renders as `""`.
    pub fn render(&self) -> String {
        let cells = self.snapshot();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("table_render", cells = cells.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        if cells.is_empty() {
            return String::new();
        }
        let layout = Layout::compute(cells);
        paint(&layout, self.config.border_style).to_text(self.config.line_ending.as_str())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Mutable handle to one cell record.
///
/// Methods consume and return the handle so calls chain:
///
/// ```
/// use boxgrid::{BorderWeight, HorizontalAlignment, Table};
///
/// let mut table = Table::new();
/// table
///     .cell(0, 0)
///     .text("title")
///     .align(HorizontalAlignment::Center)
///     .border(boxgrid::Side::Bottom, BorderWeight::Bold)
///     .col_span(2)?;
/// # Ok::<(), boxgrid::TableError>(())
/// ```
#[derive(Debug)]
pub struct CellMut<'a> {
    pos: CellPos,
    spec: &'a mut CellSpec,
}

impl CellMut<'_> {
    #[inline]
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    #[inline]
    pub fn spec(&self) -> &CellSpec {
        &*self.spec
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.spec.text = Some(text.into());
        self
    }

    /// Remove the text, taking the cell out of layout. Other attributes stay.
    pub fn clear_text(self) -> Self {
        self.spec.text = None;
        self
    }

    pub fn col_span(self, span: usize) -> Result<Self, TableError> {
        self.check_span(span, Axis::Columns)?;
        self.spec.col_span = span;
        Ok(self)
    }

    pub fn row_span(self, span: usize) -> Result<Self, TableError> {
        self.check_span(span, Axis::Rows)?;
        self.spec.row_span = span;
        Ok(self)
    }

    /// Set both spans. Nothing changes if either is zero.
    pub fn span(self, rows: usize, cols: usize) -> Result<Self, TableError> {
        self.check_span(rows, Axis::Rows)?;
        self.check_span(cols, Axis::Columns)?;
        self.spec.row_span = rows;
        self.spec.col_span = cols;
        Ok(self)
    }

    fn check_span(&self, span: usize, axis: Axis) -> Result<(), TableError> {
        if span == 0 {
            return Err(TableError::ZeroSpan {
                pos: self.pos,
                axis,
            });
        }
        Ok(())
    }

    /// Override every margin side.
    pub fn margin(self, margin: impl Into<Sides<usize>>) -> Self {
        let margin: Sides<usize> = margin.into();
        self.spec.margin = margin.map(Some);
        self
    }

    pub fn margin_side(self, side: Side, inset: usize) -> Self {
        self.spec.margin.set(side, Some(inset));
        self
    }

    /// Override every border side.
    pub fn borders(self, borders: impl Into<Sides<BorderWeight>>) -> Self {
        let borders: Sides<BorderWeight> = borders.into();
        self.spec.borders = borders.map(Some);
        self
    }

    pub fn border(self, side: Side, weight: BorderWeight) -> Self {
        self.spec.borders.set(side, Some(weight));
        self
    }

    pub fn align(self, align: HorizontalAlignment) -> Self {
        self.spec.h_align = Some(align);
        self
    }

    pub fn valign(self, align: VerticalAlignment) -> Self {
        self.spec.v_align = Some(align);
        self
    }
}
