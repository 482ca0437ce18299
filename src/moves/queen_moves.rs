//! The queen is exactly the union of bishop and rook rules, for both the
//! attack predicate and the move predicate.

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::Color;
use crate::moves::bishop_moves::{bishop_attacks_king, bishop_can_move, bishop_destinations};
use crate::moves::rook_moves::{rook_attacks_king, rook_can_move, rook_destinations};

#[inline]
pub fn queen_attacks_king(grid: &BoardGrid, location: BoardLocation, color: Color) -> bool {
    bishop_attacks_king(grid, location, color) || rook_attacks_king(grid, location, color)
}

pub fn queen_destinations(grid: &BoardGrid, location: BoardLocation, color: Color) -> Vec<BoardLocation> {
    let mut out = bishop_destinations(grid, location, color);
    out.extend(rook_destinations(grid, location, color));
    out
}

pub fn queen_can_move(grid: &mut BoardGrid, location: BoardLocation, color: Color) -> bool {
    bishop_can_move(grid, location, color) || rook_can_move(grid, location, color)
}
