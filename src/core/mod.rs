//! Grid, classifier, glyph tables: everything the pass reads.

pub mod config;
pub mod connector;
pub mod constants;
pub mod error;
pub mod glyphs;
pub mod grid;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use connector::is_connector;
pub use constants::{HORIZONTAL, SENTINEL, VERTICAL};
pub use error::Error;
pub use glyphs::{Neighbors, ROUNDED, SQUARE, Style};
pub use grid::Grid;
