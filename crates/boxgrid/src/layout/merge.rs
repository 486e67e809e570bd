#![forbid(unsafe_code)]

//! Removal of transient axes.
//!
//! A physical column is transient when no footprint starts in it: every cell
//! covering it only spans through. Such a column carries no content, so it
//! is dropped and the spans passing through it shrink by one. Rows are
//! handled the same way after columns.

use super::grid::PhysicalGrid;

/// How many axes a merge removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    pub columns_removed: usize,
    pub rows_removed: usize,
}

impl MergeReport {
    #[inline]
    pub const fn is_noop(&self) -> bool {
        self.columns_removed == 0 && self.rows_removed == 0
    }
}

/// Drop transient columns then transient rows, descending.
///
/// Running this on its own output removes nothing.
pub fn merge_transient(grid: &mut PhysicalGrid) -> MergeReport {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("transient_merge", rows = grid.rows(), cols = grid.cols());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut cols = grid.cols();
    let mut rows = grid.rows();
    let footprints = grid.footprints_mut();

    let mut columns_removed = 0;
    for k in (0..cols).rev() {
        if footprints.iter().any(|f| f.col == k) {
            continue;
        }
        for f in footprints.iter_mut() {
            collapse(&mut f.col, &mut f.col_span, k);
        }
        cols -= 1;
        columns_removed += 1;
    }

    let mut rows_removed = 0;
    for k in (0..rows).rev() {
        if footprints.iter().any(|f| f.row == k) {
            continue;
        }
        for f in footprints.iter_mut() {
            collapse(&mut f.row, &mut f.row_span, k);
        }
        rows -= 1;
        rows_removed += 1;
    }

    if columns_removed > 0 || rows_removed > 0 {
        grid.set_dimensions(rows, cols);
        grid.rebuild_owners();
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(columns_removed, rows_removed, "transient axes merged");

    MergeReport {
        columns_removed,
        rows_removed,
    }
}

/// Remove axis index `k` from the interval `[start, start + span)`.
#[inline]
fn collapse(start: &mut usize, span: &mut usize, k: usize) {
    if *start > k {
        *start -= 1;
    } else if k < *start + *span {
        debug_assert!(*span > 1, "axis {k} removed from under a span starting there");
        *span -= 1;
    }
}
