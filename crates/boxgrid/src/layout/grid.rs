#![forbid(unsafe_code)]

//! Packing of logical cells into a dense physical grid.
//!
//! Logical coordinates only order cells and group them into rows. Each
//! distinct logical row becomes the next physical row, and inside it cells
//! take the first free physical column in ascending logical order. A cell
//! whose span rectangle would collide with an earlier reservation cascades
//! to the next physical row until it fits.

use std::ops::Range;

use boxgrid_core::geometry::{Edges, Side};

use crate::cell::ResolvedCell;

/// Physical rectangle occupied by one logical cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Footprint {
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl Footprint {
    #[inline]
    pub const fn new(row: usize, col: usize, row_span: usize, col_span: usize) -> Self {
        Self {
            row,
            col,
            row_span,
            col_span,
        }
    }

    /// Row index past the last covered row.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.row + self.row_span
    }

    /// Column index past the last covered column.
    #[inline]
    pub const fn right(&self) -> usize {
        self.col + self.col_span
    }

    #[inline]
    pub const fn last_row(&self) -> usize {
        self.bottom() - 1
    }

    #[inline]
    pub const fn last_col(&self) -> usize {
        self.right() - 1
    }

    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.row..self.bottom()
    }

    #[inline]
    pub fn cols(&self) -> Range<usize> {
        self.col..self.right()
    }

    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.bottom() && col >= self.col && col < self.right()
    }

    /// Which outer edges of the footprint the sub-cell at (row, col) lies on.
    ///
    /// Interior sub-cells of a span lie on none.
    pub fn edges_at(&self, row: usize, col: usize) -> Edges {
        debug_assert!(self.contains(row, col), "({row}, {col}) outside {self:?}");
        let mut edges = Edges::empty();
        if col == self.col {
            edges |= Edges::of(Side::Left);
        }
        if row == self.row {
            edges |= Edges::of(Side::Top);
        }
        if col == self.last_col() {
            edges |= Edges::of(Side::Right);
        }
        if row == self.last_row() {
            edges |= Edges::of(Side::Bottom);
        }
        edges
    }
}

/// Dense physical grid: one footprint per logical cell plus the owner map.
///
/// `footprints[i]` belongs to the `i`-th cell handed to [`PhysicalGrid::build`].
/// Every physical coordinate has at most one owner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysicalGrid {
    rows: usize,
    cols: usize,
    footprints: Vec<Footprint>,
    owners: Vec<Option<usize>>,
}

impl PhysicalGrid {
    /// Pack `cells`, which must already be in ascending (row, col) order.
    pub fn build(cells: &[ResolvedCell]) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("grid_build", cells = cells.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        debug_assert!(
            cells.windows(2).all(|w| w[0].pos <= w[1].pos),
            "cells must be sorted by position"
        );

        let mut occupancy = Occupancy::default();
        let mut footprints = Vec::with_capacity(cells.len());
        let mut last_logical_row = None;
        let mut base_row = 0;

        for cell in cells {
            debug_assert!(cell.row_span >= 1 && cell.col_span >= 1);
            match last_logical_row {
                Some(row) if row == cell.pos.row => {}
                Some(_) => {
                    base_row += 1;
                    last_logical_row = Some(cell.pos.row);
                }
                None => last_logical_row = Some(cell.pos.row),
            }

            let mut row = base_row;
            let footprint = loop {
                let col = occupancy.first_free(row);
                let candidate = Footprint::new(row, col, cell.row_span, cell.col_span);
                if occupancy.is_free(&candidate) {
                    break candidate;
                }
                row += 1;
            };
            occupancy.reserve(&footprint);
            footprints.push(footprint);
        }

        let grid = Self::from_footprints(footprints);

        #[cfg(feature = "tracing")]
        tracing::trace!(rows = grid.rows, cols = grid.cols, "physical grid packed");

        grid
    }

    /// Assemble a grid from already placed footprints.
    ///
    /// # Panics
    ///
    /// Panics if two footprints overlap.
    pub fn from_footprints(footprints: Vec<Footprint>) -> Self {
        let rows = footprints.iter().map(Footprint::bottom).max().unwrap_or(0);
        let cols = footprints.iter().map(Footprint::right).max().unwrap_or(0);
        let mut grid = Self {
            rows,
            cols,
            footprints,
            owners: Vec::new(),
        };
        grid.rebuild_owners();
        grid
    }

    pub(crate) fn rebuild_owners(&mut self) {
        self.owners = vec![None; self.rows * self.cols];
        for (i, f) in self.footprints.iter().enumerate() {
            for row in f.rows() {
                for col in f.cols() {
                    let slot = &mut self.owners[row * self.cols + col];
                    assert!(
                        slot.is_none(),
                        "physical cell ({row}, {col}) owned twice"
                    );
                    *slot = Some(i);
                }
            }
        }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub(crate) fn footprints_mut(&mut self) -> &mut Vec<Footprint> {
        &mut self.footprints
    }

    pub(crate) fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Index of the cell owning (row, col), if any.
    #[inline]
    pub fn owner(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            self.owners[row * self.cols + col]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }
}

/// Growable occupancy bitmap used while packing.
#[derive(Debug, Default)]
struct Occupancy {
    rows: Vec<Vec<bool>>,
}

impl Occupancy {
    fn occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    fn first_free(&self, row: usize) -> usize {
        let mut col = 0;
        while self.occupied(row, col) {
            col += 1;
        }
        col
    }

    fn is_free(&self, f: &Footprint) -> bool {
        f.rows()
            .all(|row| f.cols().all(|col| !self.occupied(row, col)))
    }

    fn reserve(&mut self, f: &Footprint) {
        if self.rows.len() < f.bottom() {
            self.rows.resize_with(f.bottom(), Vec::new);
        }
        for row in f.rows() {
            let cells = &mut self.rows[row];
            if cells.len() < f.right() {
                cells.resize(f.right(), false);
            }
            for col in f.cols() {
                cells[col] = true;
            }
        }
    }
}
