//! Neighbour bitmask plus the two fixed junction glyph tables.
//!
//! The tables are spelled out entry by entry: corner glyphs are not a
//! function of the bitmask, and the rounded set only differs from the
//! square one on the four single-corner masks.

use bitflags::bitflags;

use crate::core::constants::{DASH, HORIZONTAL, PIPE, PLUS, VERTICAL};

bitflags! {
    /// Which axis neighbours of a junction cell are connectors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Neighbors: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Neighbors {
    /// Exactly two adjacent directions, i.e. a plain corner.
    #[must_use]
    pub fn is_single_corner(self) -> bool {
        self.bits().count_ones() == 2
            && self != Self::UP | Self::DOWN
            && self != Self::LEFT | Self::RIGHT
    }

    #[inline]
    const fn index(self) -> usize {
        self.bits() as usize
    }
}

/// Indexed by `Neighbors::bits()`.
pub const SQUARE: [char; 16] = [
    PLUS,       //
    '\u{2575}', //                     Up
    '\u{2577}', //               Down
    '\u{2502}', //               Down  Up
    '\u{2574}', //        Left
    '\u{2518}', //        Left         Up
    '\u{2510}', //        Left   Down
    '\u{2524}', //        Left   Down  Up
    '\u{2576}', // Right
    '\u{2514}', // Right               Up
    '\u{250C}', // Right         Down
    '\u{251C}', // Right         Down  Up
    '\u{2500}', // Right  Left
    '\u{2534}', // Right  Left         Up
    '\u{252C}', // Right  Left   Down
    '\u{253C}', // Right  Left   Down  Up
];

/// Same as [`SQUARE`] except the corners are arcs.
pub const ROUNDED: [char; 16] = [
    PLUS,       //
    '\u{2575}', //                     Up
    '\u{2577}', //               Down
    '\u{2502}', //               Down  Up
    '\u{2574}', //        Left
    '\u{256F}', //        Left         Up
    '\u{256E}', //        Left   Down
    '\u{2524}', //        Left   Down  Up
    '\u{2576}', // Right
    '\u{2570}', // Right               Up
    '\u{256D}', // Right         Down
    '\u{251C}', // Right         Down  Up
    '\u{2500}', // Right  Left
    '\u{2534}', // Right  Left         Up
    '\u{252C}', // Right  Left   Down
    '\u{253C}', // Right  Left   Down  Up
];

/// Corner style of a junction glyph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Style {
    #[default]
    Square,
    Rounded,
}

impl Style {
    #[inline]
    #[must_use]
    pub const fn table(self) -> &'static [char; 16] {
        match self {
            Self::Square => &SQUARE,
            Self::Rounded => &ROUNDED,
        }
    }

    #[inline]
    #[must_use]
    pub const fn glyph(self, neighbors: Neighbors) -> char {
        self.table()[neighbors.index()]
    }
}

/// Straight replacement for a segment marker.
#[inline]
#[must_use]
pub const fn segment_glyph(ch: char) -> Option<char> {
    match ch {
        DASH => Some(HORIZONTAL),
        PIPE => Some(VERTICAL),
        _ => None,
    }
}
