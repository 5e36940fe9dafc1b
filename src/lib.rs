//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! ```
//! let out = unicode_lines::convert(b"+--+\n|  |\n+--+");
//! assert_eq!(out, "┌──┐\n│  │\n└──┘");
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    connector::is_connector,
    error::Error,
    glyphs::{Neighbors, ROUNDED, SQUARE, Style},
    grid::Grid,
};

pub use render::{PassStats, convert, convert_grid, convert_with, junction_neighbors};
