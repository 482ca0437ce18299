//! Canonical rule constants.
//!
//! Static literals used to set up a standard game: board size, the standard
//! starting placement in the engine's layout notation, and the world scale
//! applied to board cells.

/// Side length of a standard chess board.
pub const STANDARD_BOARD_SIZE: usize = 8;

/// Largest side length a grid may be built with.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Standard starting placement. Rows are listed from the highest row down to
/// row 0, so White's back rank is the last segment.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// World units per board cell.
pub const DEFAULT_SQUARE_SCALE: f32 = 1.5;
