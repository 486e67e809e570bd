#![forbid(unsafe_code)]

//! Column width and row height distribution.
//!
//! A cell's required size is handed out one unit at a time over the tracks
//! it spans. Widths walk from the rightmost spanned column leftward, heights
//! from the topmost spanned row downward, wrapping until the budget is
//! spent. On the first pass only, every interior border gap the walk steps
//! over is deducted from the budget: the cell gets that space for free.
//! A track's final size is the largest count any cell gave it.

use super::borders::BorderGrid;
use super::grid::PhysicalGrid;
use crate::cell::ResolvedCell;

/// Physical column widths and row heights.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackSizes {
    pub widths: Vec<usize>,
    pub heights: Vec<usize>,
}

impl TrackSizes {
    /// Compute minimal track sizes for `cells` on `grid`.
    pub fn distribute(grid: &PhysicalGrid, borders: &BorderGrid, cells: &[ResolvedCell]) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "size_distribute",
            rows = grid.rows(),
            cols = grid.cols()
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let mut widths = vec![0; grid.cols()];
        let mut heights = vec![0; grid.rows()];
        let col_gaps = borders.col_gaps();
        let row_gaps = borders.row_gaps();

        for (cell, f) in cells.iter().zip(grid.footprints()) {
            // Rightmost column first; the gap after column c is the one on its left.
            let col_steps: Vec<(usize, usize)> = f
                .cols()
                .rev()
                .map(|c| (c, if c > f.col { col_gaps[c] } else { 0 }))
                .collect();
            spread(cell.required_width(), &col_steps, &mut widths);

            // Topmost row first; the gap after row r is the one below it.
            let row_steps: Vec<(usize, usize)> = f
                .rows()
                .map(|r| (r, if r < f.last_row() { row_gaps[r + 1] } else { 0 }))
                .collect();
            spread(cell.required_height(), &row_steps, &mut heights);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            width = widths.iter().sum::<usize>(),
            height = heights.iter().sum::<usize>(),
            "tracks sized"
        );

        Self { widths, heights }
    }
}

/// Hand out `budget` over `steps` as `(track, gap_after)` pairs, raising
/// each track in `sizes` to at least its share.
fn spread(budget: usize, steps: &[(usize, usize)], sizes: &mut [usize]) {
    if steps.is_empty() {
        return;
    }
    let mut counts = vec![0usize; steps.len()];
    let mut remaining = budget;
    let mut first_pass = true;

    while remaining > 0 {
        for (count, &(_, gap)) in counts.iter_mut().zip(steps) {
            if remaining == 0 {
                break;
            }
            *count += 1;
            remaining -= 1;
            if first_pass {
                remaining = remaining.saturating_sub(gap);
            }
        }
        first_pass = false;
    }

    for (&count, &(track, _)) in counts.iter().zip(steps) {
        sizes[track] = sizes[track].max(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellPos;
    use crate::layout::grid::Footprint;
    use boxgrid_core::geometry::Sides;

    fn zero_margin(row: usize, col: usize, text: &str) -> ResolvedCell {
        ResolvedCell {
            margin: Sides::all(0),
            ..ResolvedCell::new(CellPos::new(row, col), text)
        }
    }

    fn sizes_for(footprints: Vec<Footprint>, cells: &[ResolvedCell]) -> TrackSizes {
        let grid = PhysicalGrid::from_footprints(footprints);
        let borders = BorderGrid::reconcile(&grid, cells);
        TrackSizes::distribute(&grid, &borders, cells)
    }

    #[test]
    fn wide_cell_over_three_columns() {
        let cells = [
            zero_margin(0, 0, "1234567"),
            zero_margin(1, 0, "a"),
            zero_margin(1, 1, "b"),
            zero_margin(1, 2, "c"),
        ];
        let sizes = sizes_for(
            vec![
                Footprint::new(0, 0, 1, 3),
                Footprint::new(1, 0, 1, 1),
                Footprint::new(1, 1, 1, 1),
                Footprint::new(1, 2, 1, 1),
            ],
            &cells,
        );
        assert_eq!(sizes.widths, vec![1, 2, 2]);
        assert_eq!(sizes.heights, vec![1, 1]);
    }

    #[test]
    fn gaps_only_count_on_first_pass() {
        let mut steps_sizes = vec![0; 2];
        // Budget 10 over 2 columns with one interior gap: 1 + gap + 1, then
        // 7 more units alternate starting from the right.
        spread(10, &[(1, 1), (0, 0)], &mut steps_sizes);
        assert_eq!(steps_sizes, vec![4, 5]);
    }

    #[test]
    fn zero_budget_allocates_nothing() {
        let mut sizes = vec![0; 3];
        spread(0, &[(2, 1), (1, 1), (0, 0)], &mut sizes);
        assert_eq!(sizes, vec![0, 0, 0]);
    }

    #[test]
    fn budget_consumed_by_gap_stops_early() {
        let mut sizes = vec![0; 3];
        spread(2, &[(2, 1), (1, 1), (0, 0)], &mut sizes);
        assert_eq!(sizes, vec![0, 0, 1]);
    }

    #[test]
    fn tall_cell_fills_rows_top_down() {
        let cells = [
            zero_margin(0, 0, "1\n2\n3\n4\n5"),
            zero_margin(0, 1, "a"),
            zero_margin(1, 0, "b"),
        ];
        let sizes = sizes_for(
            vec![
                Footprint::new(0, 0, 2, 1),
                Footprint::new(0, 1, 1, 1),
                Footprint::new(1, 1, 1, 1),
            ],
            &cells,
        );
        // 5 lines: one per row plus the gap between them, then one more each.
        assert_eq!(sizes.heights, vec![2, 2]);
    }

    #[test]
    fn global_size_is_max_over_cells() {
        let cells = [zero_margin(0, 0, "abc"), zero_margin(1, 0, "abcdef")];
        let sizes = sizes_for(
            vec![Footprint::new(0, 0, 1, 1), Footprint::new(1, 0, 1, 1)],
            &cells,
        );
        assert_eq!(sizes.widths, vec![6]);
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn steps_for(span: usize, gaps: &[usize]) -> Vec<(usize, usize)> {
            (0..span)
                .rev()
                .map(|c| (c, if c > 0 { gaps[c] } else { 0 }))
                .collect()
        }

        proptest! {
            #[test]
            fn spanned_size_always_fits(
                budget in 0usize..60,
                gaps in proptest::collection::vec(0usize..2, 6),
                span in 1usize..6,
            ) {
                let mut sizes = vec![0; span];
                spread(budget, &steps_for(span, &gaps), &mut sizes);
                let interior: usize = (1..span).map(|c| gaps[c]).sum();
                prop_assert!(sizes.iter().sum::<usize>() + interior >= budget);
            }

            #[test]
            fn larger_budget_never_shrinks_a_track(
                budget in 0usize..60,
                gaps in proptest::collection::vec(0usize..2, 6),
                span in 1usize..6,
            ) {
                let steps = steps_for(span, &gaps);
                let mut small = vec![0; span];
                let mut large = vec![0; span];
                spread(budget, &steps, &mut small);
                spread(budget + 1, &steps, &mut large);
                for (s, l) in small.iter().zip(&large) {
                    prop_assert!(l >= s);
                }
            }

            #[test]
            fn shares_differ_by_at_most_one_without_gaps(
                budget in 0usize..60,
                span in 1usize..6,
            ) {
                let gaps = vec![0; 6];
                let mut sizes = vec![0; span];
                spread(budget, &steps_for(span, &gaps), &mut sizes);
                let max = sizes.iter().copied().max().unwrap_or(0);
                let min = sizes.iter().copied().min().unwrap_or(0);
                prop_assert!(max - min <= 1);
            }
        }
    }
}
