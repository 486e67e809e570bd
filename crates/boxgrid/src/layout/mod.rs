#![forbid(unsafe_code)]

//! Physical layout of a cell snapshot.
//!
//! [`Layout::compute`] runs the pipeline: pack cells into a dense grid,
//! drop transient axes, reconcile borders, then size tracks. The result is
//! rebuilt from scratch on every call.
//!
//! # Example
//!
//! ```
//! use boxgrid::cell::{CellPos, ResolvedCell};
//! use boxgrid::layout::Layout;
//!
//! let layout = Layout::compute(vec![
//!     ResolvedCell::new(CellPos::new(0, 0), "ab"),
//!     ResolvedCell::new(CellPos::new(0, 7), "cde"),
//! ]);
//! assert_eq!(layout.columns(), 2);
//! assert_eq!(layout.column_widths(), &[2, 3]);
//! ```

pub mod borders;
pub mod grid;
pub mod merge;
pub mod sizing;

pub use borders::BorderGrid;
pub use grid::{Footprint, PhysicalGrid};
pub use merge::{MergeReport, merge_transient};
pub use sizing::TrackSizes;

use crate::cell::{CellPos, ResolvedCell};

/// A fully computed physical layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: Vec<ResolvedCell>,
    grid: PhysicalGrid,
    borders: BorderGrid,
    sizes: TrackSizes,
    merge: MergeReport,
}

impl Layout {
    /// Lay out `cells`. Order does not matter; cells are sorted by position.
    pub fn compute(mut cells: Vec<ResolvedCell>) -> Self {
        cells.sort_by_key(|c| c.pos);
        let mut grid = PhysicalGrid::build(&cells);
        let merge = merge_transient(&mut grid);
        let borders = BorderGrid::reconcile(&grid, &cells);
        let sizes = TrackSizes::distribute(&grid, &borders, &cells);
        Self {
            cells,
            grid,
            borders,
            sizes,
            merge,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Physical row count.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Physical column count.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    pub fn column_widths(&self) -> &[usize] {
        &self.sizes.widths
    }

    #[inline]
    pub fn row_heights(&self) -> &[usize] {
        &self.sizes.heights
    }

    /// Width of each column boundary, `columns() + 1` entries.
    #[inline]
    pub fn col_gaps(&self) -> &[usize] {
        self.borders.col_gaps()
    }

    /// Height of each row boundary, `rows() + 1` entries.
    #[inline]
    pub fn row_gaps(&self) -> &[usize] {
        self.borders.row_gaps()
    }

    /// Cells in layout order; `cells()[i]` occupies `footprints()[i]`.
    #[inline]
    pub fn cells(&self) -> &[ResolvedCell] {
        &self.cells
    }

    #[inline]
    pub fn footprints(&self) -> &[Footprint] {
        self.grid.footprints()
    }

    /// Footprint of the first cell declared at `pos`.
    pub fn footprint_of(&self, pos: CellPos) -> Option<Footprint> {
        self.cells
            .iter()
            .position(|c| c.pos == pos)
            .map(|i| self.grid.footprints()[i])
    }

    #[inline]
    pub fn grid(&self) -> &PhysicalGrid {
        &self.grid
    }

    #[inline]
    pub fn borders(&self) -> &BorderGrid {
        &self.borders
    }

    #[inline]
    pub fn merge_report(&self) -> MergeReport {
        self.merge
    }

    /// Rendered width in characters.
    pub fn width(&self) -> usize {
        self.column_widths().iter().sum::<usize>() + self.col_gaps().iter().sum::<usize>()
    }

    /// Rendered height in lines.
    pub fn height(&self) -> usize {
        self.row_heights().iter().sum::<usize>() + self.row_gaps().iter().sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_has_no_extent() {
        let layout = Layout::compute(Vec::new());
        assert!(layout.is_empty());
        assert_eq!((layout.rows(), layout.columns()), (0, 0));
        assert_eq!((layout.width(), layout.height()), (0, 0));
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = ResolvedCell::new(CellPos::new(0, 0), "a");
        let b = ResolvedCell::new(CellPos::new(0, 3), "bb");
        let c = ResolvedCell::new(CellPos::new(2, 0), "ccc");
        let forward = Layout::compute(vec![a.clone(), b.clone(), c.clone()]);
        let backward = Layout::compute(vec![c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn span_through_columns_are_merged_away() {
        // Both rows span two columns and nothing starts in the second one.
        let wide = |row| ResolvedCell {
            col_span: 2,
            ..ResolvedCell::new(CellPos::new(row, 0), "x")
        };
        let layout = Layout::compute(vec![wide(0), wide(1)]);
        assert_eq!(layout.merge_report().columns_removed, 1);
        assert_eq!(layout.columns(), 1);
        assert_eq!(
            layout.footprint_of(CellPos::new(1, 0)),
            Some(Footprint::new(1, 0, 1, 1))
        );
    }

    #[test]
    fn extent_counts_tracks_and_gaps() {
        let layout = Layout::compute(vec![
            ResolvedCell::new(CellPos::new(0, 0), "ab"),
            ResolvedCell::new(CellPos::new(1, 0), "c\nd"),
        ]);
        assert_eq!(layout.width(), 2 + 2);
        assert_eq!(layout.height(), 1 + 2 + 3);
        assert_eq!(layout.footprint_of(CellPos::new(5, 5)), None);
    }
}
