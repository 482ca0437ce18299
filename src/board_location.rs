use std::fmt;

use serde::{Deserialize, Serialize};

/// A (row, column) cell address. Both axes are 0-indexed.
///
/// Coordinates are signed so that ray walks can step off the board and be
/// rejected by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardLocation {
    pub row: i32,
    pub column: i32,
}

impl BoardLocation {
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Location shifted by `(d_row, d_column)`, without bounds checking.
    #[inline]
    pub const fn offset(self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// True when both axes fall inside `[0, board_size)`.
    #[inline]
    pub fn is_within(self, board_size: usize) -> bool {
        let size = board_size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.column as i64))
    }
}

impl From<(i32, i32)> for BoardLocation {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
