//! Decides which characters a junction may join to.

use crate::core::constants::{BOX_DRAWING_FIRST, BOX_DRAWING_LAST, DASH, PIPE, PLUS, STAR};

/// Raw ASCII markers and anything already in the box-drawing block count as
/// line segments. Recognising converted glyphs keeps the pass idempotent.
#[inline]
#[must_use]
pub const fn is_connector(ch: char) -> bool {
    matches!(ch, PIPE | DASH | PLUS | STAR) || matches!(ch, BOX_DRAWING_FIRST..=BOX_DRAWING_LAST)
}
