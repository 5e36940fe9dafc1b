//! The conversion pass: ASCII line art to box-drawing glyphs, in place.
//!
//! ### Workflow
//! 1. `Grid::from_bytes` materialises the file.
//! 2. `convert_grid` walks every cell row-major, left to right:
//!    `-`/`|` become straight segments, `+`/`*` look at their four axis
//!    neighbours and take a glyph from the table their marker selects.
//! 3. `Grid`'s `Display` joins the rows back up.
//!
//! Junctions read the grid as it is at the moment they are visited, so
//! some of their neighbours are already converted and some are not. Both
//! forms are connectors, which makes the result independent of visiting
//! order; the order is still fixed to keep output reproducible.

use log::trace;

use crate::core::{
    config::Config,
    connector::is_connector,
    glyphs::{Neighbors, segment_glyph},
    grid::Grid,
};

/// What a single pass replaced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PassStats {
    pub segments: usize,
    pub junctions: usize,
}

/// Bitmask of the connectors around `(row, col)`.
///
/// Row/column 0 probe `usize::MAX` for their missing neighbour, which the
/// grid treats like any other out-of-bounds read.
#[must_use]
pub fn junction_neighbors(grid: &Grid, row: usize, col: usize) -> Neighbors {
    let probes = [
        (Neighbors::UP, row.wrapping_sub(1), col),
        (Neighbors::DOWN, row + 1, col),
        (Neighbors::LEFT, row, col.wrapping_sub(1)),
        (Neighbors::RIGHT, row, col + 1),
    ];

    let mut mask = Neighbors::empty();
    for (dir, r, c) in probes {
        if is_connector(grid.get(r, c)) {
            mask |= dir;
        }
    }
    mask
}

/// Convert `grid` in place. Never fails: unknown characters pass through.
pub fn convert_grid(grid: &mut Grid, config: &Config) -> PassStats {
    let mut stats = PassStats::default();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let ch = grid.get(row, col);

            if let Some(seg) = segment_glyph(ch) {
                grid.set(row, col, seg);
                stats.segments += 1;
            } else if let Some(style) = config.style_for(ch) {
                let mask = junction_neighbors(grid, row, col);
                let glyph = style.glyph(mask);
                trace!("({row}, {col}) {ch:?} {mask:?} -> {glyph:?}");
                grid.set(row, col, glyph);
                stats.junctions += 1;
            }
        }
    }
    stats
}

/// One-shot helper with the default marker styles.
#[must_use]
pub fn convert(input: &[u8]) -> String {
    convert_with(input, &Config::default())
}

#[must_use]
pub fn convert_with(input: &[u8], config: &Config) -> String {
    let mut grid = Grid::from_bytes(input);
    convert_grid(&mut grid, config);
    grid.to_string()
}
