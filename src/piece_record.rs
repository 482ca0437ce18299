use crate::{
    board_location::BoardLocation,
    game_state::chess_types::{Color, PieceKind},
};

/// Index of a piece in its board's piece arena.
pub type PieceId = usize;

/// A chess piece and where it currently stands.
/// Rule evaluation dispatches on `kind`; nothing here knows about rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// Arena index, stable for the piece's lifetime.
    pub id: PieceId,
    /// The kind (type) of the piece (e.g., pawn, knight).
    pub kind: PieceKind,
    /// Piece owner
    pub color: Color,
    /// Current location, kept in sync with the grid cell referencing the piece.
    pub location: BoardLocation,
    /// Where the piece stood when the board was set up or the piece was created.
    pub starting_location: BoardLocation,
    /// False once captured or promoted away.
    pub active: bool,
}

impl PieceRecord {
    pub fn new(id: PieceId, kind: PieceKind, color: Color, location: BoardLocation) -> Self {
        Self {
            id,
            kind,
            color,
            location,
            starting_location: location,
            active: true,
        }
    }

    #[inline]
    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.color != color
    }
}

/// Piece description used to set up a board before ids are assigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub color: Color,
    pub location: BoardLocation,
}

impl PieceSpec {
    pub const fn new(kind: PieceKind, color: Color, row: i32, column: i32) -> Self {
        Self {
            kind,
            color,
            location: BoardLocation::new(row, column),
        }
    }
}
