#![forbid(unsafe_code)]

//! Property tests for layout and rendering invariants.
//!
//! Tables are generated from random sparse coordinates, spans and border
//! weights, then checked for:
//! 1. Dense packing: every physical coordinate has at most one owner and
//!    every physical row and column has a footprint starting in it.
//! 2. Extent: the rendered block is exactly `width x height`.
//! 3. Content: every cell's text appears in the output.
//! 4. Border merging is order independent.
//! 5. Longer text never shrinks a column.

use boxgrid::{BorderStyle, BorderWeight, LineEnding, Sides, Table, TableConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct CellSeed {
    row: usize,
    col: usize,
    row_span: usize,
    col_span: usize,
    len: usize,
    borders: Sides<BorderWeight>,
}

fn arb_weight() -> impl Strategy<Value = BorderWeight> {
    prop_oneof![
        Just(BorderWeight::None),
        Just(BorderWeight::Normal),
        Just(BorderWeight::Bold),
    ]
}

fn arb_style() -> impl Strategy<Value = BorderStyle> {
    prop_oneof![
        Just(BorderStyle::Ascii),
        Just(BorderStyle::UnicodeSingle),
        Just(BorderStyle::UnicodeDouble),
    ]
}

fn arb_seed() -> impl Strategy<Value = CellSeed> {
    (
        0usize..6,
        0usize..8,
        1usize..3,
        1usize..4,
        0usize..8,
        (arb_weight(), arb_weight(), arb_weight(), arb_weight()),
    )
        .prop_map(|(row, col, row_span, col_span, len, (l, t, r, b))| CellSeed {
            row,
            col,
            row_span,
            col_span,
            len,
            borders: Sides::new(l, t, r, b),
        })
}

fn label(row: usize, col: usize, len: usize) -> String {
    let tag = format!("r{row}c{col}");
    let pad = len.saturating_sub(tag.len());
    format!("{tag}{}", "x".repeat(pad))
}

fn build(style: BorderStyle, seeds: &[CellSeed]) -> Table {
    let mut table = Table::with_config(TableConfig {
        border_style: style,
        line_ending: LineEnding::Lf,
        ..TableConfig::default()
    });
    for s in seeds {
        table
            .cell(s.row, s.col)
            .text(label(s.row, s.col, s.len))
            .borders(s.borders)
            .span(s.row_span, s.col_span)
            .unwrap();
    }
    table
}

proptest! {
    #[test]
    fn physical_grid_is_dense_and_exclusive(seeds in proptest::collection::vec(arb_seed(), 0..14)) {
        let layout = build(BorderStyle::Ascii, &seeds).layout();
        let grid = layout.grid();
        let mut owned = vec![0usize; grid.rows() * grid.cols()];
        for f in layout.footprints() {
            for row in f.rows() {
                for col in f.cols() {
                    owned[row * grid.cols() + col] += 1;
                }
            }
        }
        prop_assert!(owned.iter().all(|&n| n <= 1));
        for col in 0..layout.columns() {
            prop_assert!(layout.footprints().iter().any(|f| f.col == col));
        }
        for row in 0..layout.rows() {
            prop_assert!(layout.footprints().iter().any(|f| f.row == row));
        }
    }

    #[test]
    fn rendered_block_matches_layout_extent(
        style in arb_style(),
        seeds in proptest::collection::vec(arb_seed(), 1..10),
    ) {
        let table = build(style, &seeds);
        let layout = table.layout();
        let rendered = table.render();
        let lines: Vec<&str> = rendered.split('\n').collect();
        prop_assert_eq!(lines.len(), layout.height());
        for line in lines {
            prop_assert_eq!(line.chars().count(), layout.width());
        }
    }

    #[test]
    fn every_label_is_rendered(seeds in proptest::collection::vec(arb_seed(), 1..10)) {
        let table = build(BorderStyle::UnicodeSingle, &seeds);
        let rendered = table.render();
        for (pos, spec) in table.alive_cells() {
            let text = spec.text().unwrap_or_default();
            prop_assert!(
                rendered.contains(text),
                "missing {} at {}:\n{}", text, pos, rendered
            );
        }
    }

    #[test]
    fn shared_border_is_order_independent(
        w1 in arb_weight(),
        w2 in arb_weight(),
        style in arb_style(),
    ) {
        let render = |left_right: BorderWeight, right_left: BorderWeight| {
            let mut table = build(style, &[]);
            table.cell(0, 0).text("a").border(boxgrid::Side::Right, left_right);
            table.cell(0, 1).text("b").border(boxgrid::Side::Left, right_left);
            table.render()
        };
        prop_assert_eq!(render(w1, w2), render(w2, w1));
        prop_assert_eq!(render(w1, w2), render(w1.max(w2), w1.max(w2)));
    }

    #[test]
    fn longer_text_never_shrinks_columns(
        seeds in proptest::collection::vec(arb_seed(), 1..8),
        which in any::<prop::sample::Index>(),
        extra in 1usize..6,
    ) {
        let before = build(BorderStyle::Ascii, &seeds).layout();
        let mut grown = seeds.clone();
        let i = which.index(grown.len());
        grown[i].len += extra;
        let after = build(BorderStyle::Ascii, &grown).layout();
        // Same positions and spans give the same physical grid.
        prop_assert_eq!(before.footprints(), after.footprints());
        for (b, a) in before.column_widths().iter().zip(after.column_widths()) {
            prop_assert!(a >= b);
        }
    }
}

#[test]
fn empty_table_is_empty_string_for_every_style() {
    for style in [
        BorderStyle::Ascii,
        BorderStyle::UnicodeSingle,
        BorderStyle::UnicodeDouble,
    ] {
        assert_eq!(build(style, &[]).render(), "");
    }
}
