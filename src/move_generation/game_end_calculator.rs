//! Terminal-state detection.
//!
//! A side has ended (checkmate or stalemate) when none of its active pieces
//! has a move that leaves its own king out of check. The search for each side
//! stops at the first piece that can move.

use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::{Color, SideColor};
use crate::moves::piece_rules::can_move;

pub fn check_if_game_end(grid: &mut BoardGrid) -> SideColor {
    let white_ended = !side_has_legal_move(grid, Color::White);
    let black_ended = !side_has_legal_move(grid, Color::Black);
    SideColor::from_flags(white_ended, black_ended)
}

pub fn side_has_legal_move(grid: &mut BoardGrid, color: Color) -> bool {
    let movers: Vec<_> = grid
        .pieces_of(color)
        .map(|piece| (piece.kind, piece.location))
        .collect();

    movers
        .into_iter()
        .any(|(kind, location)| can_move(grid, kind, color, location))
}
