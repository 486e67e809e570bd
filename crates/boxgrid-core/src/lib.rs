#![forbid(unsafe_code)]

//! Core: geometry and style vocabulary for boxgrid tables.

pub mod error;
pub mod geometry;
pub mod style;

pub use error::ParseError;
pub use geometry::{Edges, Rect, Side, Sides};
pub use style::{BorderStyle, BorderWeight, HorizontalAlignment, VerticalAlignment};
