//! Console output helpers

pub mod display;

pub use display::{clear_lines, Color, ColorOutput, GridFormatter};
