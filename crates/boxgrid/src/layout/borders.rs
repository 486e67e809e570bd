#![forbid(unsafe_code)]

//! Border reconciliation.
//!
//! Each physical border segment receives the maximum weight requested by
//! the cells whose footprint edge lies on it. Vertical segments are indexed
//! by (row, column boundary) and horizontal segments by (row boundary,
//! column), with boundaries numbered `0..=cols` and `0..=rows`.

use boxgrid_core::geometry::{Side, Sides};
use boxgrid_core::style::BorderWeight;

use super::grid::PhysicalGrid;
use crate::cell::ResolvedCell;

/// Merged border weights for every physical segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BorderGrid {
    rows: usize,
    cols: usize,
    /// `rows * (cols + 1)`, row-major.
    vertical: Vec<BorderWeight>,
    /// `(rows + 1) * cols`, row-major.
    horizontal: Vec<BorderWeight>,
    col_gaps: Vec<usize>,
    row_gaps: Vec<usize>,
}

impl BorderGrid {
    /// Merge the edge requests of `cells` laid out on `grid`.
    ///
    /// `cells[i]` must be the cell whose footprint is `grid.footprints()[i]`.
    pub fn reconcile(grid: &PhysicalGrid, cells: &[ResolvedCell]) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("border_reconcile", cells = cells.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        debug_assert_eq!(cells.len(), grid.footprints().len());
        let rows = grid.rows();
        let cols = grid.cols();
        let mut borders = Self {
            rows,
            cols,
            vertical: vec![BorderWeight::None; rows * (cols + 1)],
            horizontal: vec![BorderWeight::None; (rows + 1) * cols],
            col_gaps: Vec::new(),
            row_gaps: Vec::new(),
        };

        for (cell, f) in cells.iter().zip(grid.footprints()) {
            for row in f.rows() {
                for col in f.cols() {
                    let edges = f.edges_at(row, col);
                    for side in Side::ALL {
                        if edges.has(side) {
                            borders.request(row, col, side, cell.borders.get(side));
                        }
                    }
                }
            }
        }

        borders.col_gaps = (0..=cols)
            .map(|b| usize::from((0..rows).any(|r| borders.vertical(r, b).is_visible())))
            .collect();
        borders.row_gaps = (0..=rows)
            .map(|b| usize::from((0..cols).any(|c| borders.horizontal(b, c).is_visible())))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            col_gaps = borders.col_gaps.iter().sum::<usize>(),
            row_gaps = borders.row_gaps.iter().sum::<usize>(),
            "borders reconciled"
        );

        borders
    }

    fn request(&mut self, row: usize, col: usize, side: Side, weight: BorderWeight) {
        let cols = self.cols;
        let slot = match side {
            Side::Left => &mut self.vertical[row * (cols + 1) + col],
            Side::Right => &mut self.vertical[row * (cols + 1) + col + 1],
            Side::Top => &mut self.horizontal[row * cols + col],
            Side::Bottom => &mut self.horizontal[(row + 1) * cols + col],
        };
        *slot = (*slot).max(weight);
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Vertical segment at column boundary `boundary` in physical `row`.
    ///
    /// Outside the grid, `None`.
    pub fn vertical(&self, row: usize, boundary: usize) -> BorderWeight {
        if row < self.rows && boundary <= self.cols {
            self.vertical[row * (self.cols + 1) + boundary]
        } else {
            BorderWeight::None
        }
    }

    /// Horizontal segment at row boundary `boundary` in physical `col`.
    ///
    /// Outside the grid, `None`.
    pub fn horizontal(&self, boundary: usize, col: usize) -> BorderWeight {
        if boundary <= self.rows && col < self.cols {
            self.horizontal[boundary * self.cols + col]
        } else {
            BorderWeight::None
        }
    }

    /// Width (0 or 1) taken by each column boundary, `cols + 1` entries.
    #[inline]
    pub fn col_gaps(&self) -> &[usize] {
        &self.col_gaps
    }

    /// Height (0 or 1) taken by each row boundary, `rows + 1` entries.
    #[inline]
    pub fn row_gaps(&self) -> &[usize] {
        &self.row_gaps
    }

    /// Arm weights meeting at border point (row boundary, column boundary).
    pub fn junction(&self, row_boundary: usize, col_boundary: usize) -> Sides<BorderWeight> {
        let left = match col_boundary.checked_sub(1) {
            Some(col) => self.horizontal(row_boundary, col),
            None => BorderWeight::None,
        };
        let top = match row_boundary.checked_sub(1) {
            Some(row) => self.vertical(row, col_boundary),
            None => BorderWeight::None,
        };
        Sides::new(
            left,
            top,
            self.horizontal(row_boundary, col_boundary),
            self.vertical(row_boundary, col_boundary),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellPos;
    use crate::layout::grid::Footprint;

    use BorderWeight as W;

    fn cell(row: usize, col: usize, borders: Sides<BorderWeight>) -> ResolvedCell {
        ResolvedCell {
            borders,
            ..ResolvedCell::new(CellPos::new(row, col), "x")
        }
    }

    fn one_row(cells: &[ResolvedCell]) -> (PhysicalGrid, BorderGrid) {
        let grid = PhysicalGrid::build(cells);
        let borders = BorderGrid::reconcile(&grid, cells);
        (grid, borders)
    }

    #[test]
    fn shared_boundary_takes_maximum() {
        let left = cell(0, 0, Sides::new(W::Normal, W::Normal, W::None, W::Normal));
        let right = cell(0, 1, Sides::new(W::Bold, W::Normal, W::Normal, W::Normal));
        let (_, borders) = one_row(&[left, right]);
        assert_eq!(borders.vertical(0, 1), W::Bold);
        assert_eq!(borders.col_gaps(), &[1, 1, 1]);
    }

    #[test]
    fn merge_is_commutative() {
        let facing = |left_right: W, right_left: W| {
            let left = cell(0, 0, Sides::new(W::Normal, W::Normal, left_right, W::Normal));
            let right = cell(0, 1, Sides::new(right_left, W::Normal, W::Normal, W::Normal));
            one_row(&[left, right]).1.vertical(0, 1)
        };
        for w1 in BorderWeight::ALL {
            for w2 in BorderWeight::ALL {
                assert_eq!(facing(w1, w2), w1.max(w2), "{w1:?} vs {w2:?}");
                assert_eq!(facing(w2, w1), w1.max(w2), "{w2:?} vs {w1:?}");
            }
        }
    }

    #[test]
    fn span_interior_seams_stay_none() {
        let grid = PhysicalGrid::from_footprints(vec![
            Footprint::new(0, 0, 2, 2),
            Footprint::new(0, 2, 1, 1),
            Footprint::new(1, 2, 1, 1),
        ]);
        let cells = [
            ResolvedCell::new(CellPos::new(0, 0), "big"),
            ResolvedCell::new(CellPos::new(0, 1), "a"),
            ResolvedCell::new(CellPos::new(1, 0), "b"),
        ];
        let borders = BorderGrid::reconcile(&grid, &cells);
        assert_eq!(borders.vertical(0, 1), W::None);
        assert_eq!(borders.vertical(1, 1), W::None);
        assert_eq!(borders.horizontal(1, 0), W::None);
        assert_eq!(borders.horizontal(1, 2), W::Normal);
        // No cell draws on column boundary 1.
        assert_eq!(borders.col_gaps(), &[1, 0, 1, 1]);
        assert_eq!(borders.row_gaps(), &[1, 1, 1]);
    }

    #[test]
    fn none_borders_remove_the_gap() {
        let (_, borders) = one_row(&[cell(0, 0, Sides::all(W::None))]);
        assert_eq!(borders.col_gaps(), &[0, 0]);
        assert_eq!(borders.row_gaps(), &[0, 0]);
    }

    #[test]
    fn junction_arms_clip_at_grid_edge() {
        let (_, borders) = one_row(&[cell(0, 0, Sides::all(W::Normal))]);
        assert_eq!(
            borders.junction(0, 0),
            Sides::new(W::None, W::None, W::Normal, W::Normal)
        );
        assert_eq!(
            borders.junction(1, 1),
            Sides::new(W::Normal, W::Normal, W::None, W::None)
        );
        assert_eq!(borders.junction(7, 7), Sides::all(W::None));
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn arb_weight() -> impl Strategy<Value = BorderWeight> {
            prop_oneof![Just(W::None), Just(W::Normal), Just(W::Bold)]
        }

        fn arb_sides() -> impl Strategy<Value = Sides<BorderWeight>> {
            (arb_weight(), arb_weight(), arb_weight(), arb_weight())
                .prop_map(|(l, t, r, b)| Sides::new(l, t, r, b))
        }

        proptest! {
            #[test]
            fn shared_vertical_is_max_of_requests(a in arb_sides(), b in arb_sides()) {
                let (_, borders) = one_row(&[cell(0, 0, a), cell(0, 1, b)]);
                prop_assert_eq!(borders.vertical(0, 1), a.right.max(b.left));
                prop_assert_eq!(borders.vertical(0, 0), a.left);
                prop_assert_eq!(borders.vertical(0, 2), b.right);
            }

            #[test]
            fn raising_a_request_never_lowers_a_segment(a in arb_sides(), b in arb_sides()) {
                let (_, base) = one_row(&[cell(0, 0, a), cell(0, 1, b)]);
                let raised = Sides::new(W::Bold, a.top, W::Bold, a.bottom);
                let (_, after) = one_row(&[cell(0, 0, raised), cell(0, 1, b)]);
                prop_assert!(after.vertical(0, 1) >= base.vertical(0, 1));
                prop_assert_eq!(after.vertical(0, 1), W::Bold);
            }
        }
    }
}
