#![forbid(unsafe_code)]

//! Sparse, spannable text tables drawn with box-drawing borders.
//!
//! Cells are placed at logical (row, column) coordinates, which only order
//! and group them; the layout packs them into a dense physical grid.

pub mod cell;
pub mod config;
pub mod error;
pub mod layout;
pub mod paint;
pub mod table;

pub use cell::{CellPos, CellSpec, ResolvedCell};
pub use config::{ConfigError, LineEnding, TableConfig, TableConfigParse};
pub use error::{Axis, TableError};
pub use layout::{Footprint, Layout};
pub use table::{CellMut, Table};

pub use boxgrid_core::{
    BorderStyle, BorderWeight, HorizontalAlignment, ParseError, Side, Sides, VerticalAlignment,
};
