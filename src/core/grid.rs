//! Row-major character grid over one input file.
//!
//! Rows keep their original lengths; nothing is padded out to `width`.
//! Reads past the end of a row (or of the grid) yield [`SENTINEL`] and
//! writes there are dropped, so callers can probe the neighbours of edge
//! cells without any bounds bookkeeping of their own.

use std::fmt;

use crate::core::constants::{LINE_BREAK, SENTINEL};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Decode `input` as UTF-8 (invalid sequences become U+FFFD) and split
    /// it into rows on `'\n'`.
    #[must_use]
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::from(String::from_utf8_lossy(input).as_ref())
    }

    /// Length of the longest row.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, or 0 if there is no such row.
    #[inline]
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Character at `(row, col)`, or [`SENTINEL`] outside that row.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Overwrite `(row, col)`; silently ignored outside that row.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }
}

impl From<&str> for Grid {
    fn from(text: &str) -> Self {
        let rows: Vec<Vec<char>> = text
            .split(LINE_BREAK)
            .map(|line| line.chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }
}

/// Rows joined by `'\n'`, exactly as stored.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_char(LINE_BREAK)?;
            }
            for &ch in row {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}
