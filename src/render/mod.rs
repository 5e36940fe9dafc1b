pub mod pass;

pub use pass::{PassStats, convert, convert_grid, convert_with, junction_neighbors};
