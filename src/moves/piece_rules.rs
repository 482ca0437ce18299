//! Kind-dispatched piece behavior.
//!
//! Pieces are plain data; every rule question goes through one of the
//! functions below, which select the geometry for the piece's kind.

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::bishop_moves::{bishop_attacks_king, bishop_can_move, bishop_destinations};
use crate::moves::king_moves::{king_attacks_king, king_can_move, king_destinations};
use crate::moves::knight_moves::{knight_attacks_king, knight_can_move, knight_destinations};
use crate::moves::pawn_moves::{pawn_attacks_king, pawn_can_move, pawn_destinations};
use crate::moves::queen_moves::{queen_attacks_king, queen_can_move, queen_destinations};
use crate::moves::rook_moves::{rook_attacks_king, rook_can_move, rook_destinations};

/// Whether a `kind` piece of `color` standing on `location` attacks the
/// enemy king.
pub fn is_attacking_king(
    grid: &BoardGrid,
    kind: PieceKind,
    color: Color,
    location: BoardLocation,
) -> bool {
    if !grid.is_in_borders(location) {
        return false;
    }
    match kind {
        PieceKind::Pawn => pawn_attacks_king(grid, location, color),
        PieceKind::Knight => knight_attacks_king(grid, location, color),
        PieceKind::Bishop => bishop_attacks_king(grid, location, color),
        PieceKind::Rook => rook_attacks_king(grid, location, color),
        PieceKind::Queen => queen_attacks_king(grid, location, color),
        PieceKind::King => king_attacks_king(grid, location, color),
    }
}

/// Whether the piece on `location` has at least one move that does not
/// leave its own side in check. The grid is only probed through the
/// restoring simulation.
pub fn can_move(grid: &mut BoardGrid, kind: PieceKind, color: Color, location: BoardLocation) -> bool {
    if !grid.is_in_borders(location) {
        return false;
    }
    match kind {
        PieceKind::Pawn => pawn_can_move(grid, location, color),
        PieceKind::Knight => knight_can_move(grid, location, color),
        PieceKind::Bishop => bishop_can_move(grid, location, color),
        PieceKind::Rook => rook_can_move(grid, location, color),
        PieceKind::Queen => queen_can_move(grid, location, color),
        PieceKind::King => king_can_move(grid, location, color),
    }
}

/// Cells the piece could move to, ignoring whether its own king ends up in check.
pub fn reachable_destinations(
    grid: &BoardGrid,
    kind: PieceKind,
    color: Color,
    location: BoardLocation,
) -> Vec<BoardLocation> {
    if !grid.is_in_borders(location) {
        return Vec::new();
    }
    match kind {
        PieceKind::Pawn => pawn_destinations(grid, location, color),
        PieceKind::Knight => knight_destinations(grid, location, color),
        PieceKind::Bishop => bishop_destinations(grid, location, color),
        PieceKind::Rook => rook_destinations(grid, location, color),
        PieceKind::Queen => queen_destinations(grid, location, color),
        PieceKind::King => king_destinations(grid, location, color),
    }
}
