//! Pawn geometry. White pawns advance toward higher rows, Black toward lower.
//!
//! A pawn pushes one cell forward onto an empty cell, two from its starting
//! row when both cells are empty, and captures one cell diagonally forward.

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::Color;
use crate::moves::direction_lookup::{has_safe_destination, is_enemy_king_at_location};

/// Row a pawn of `color` starts on for a board of `board_size`.
#[inline]
pub fn pawn_starting_row(color: Color, board_size: usize) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => board_size as i32 - 2,
    }
}

/// Row a pawn of `color` promotes on.
#[inline]
pub fn pawn_promotion_row(color: Color, board_size: usize) -> i32 {
    match color {
        Color::White => board_size as i32 - 1,
        Color::Black => 0,
    }
}

pub fn pawn_attacks_king(grid: &BoardGrid, location: BoardLocation, color: Color) -> bool {
    let forward = color.forward();
    is_enemy_king_at_location(grid, location, forward, -1, color)
        || is_enemy_king_at_location(grid, location, forward, 1, color)
}

pub fn pawn_destinations(grid: &BoardGrid, location: BoardLocation, color: Color) -> Vec<BoardLocation> {
    let forward = color.forward();
    let mut out = Vec::new();

    let one_step = location.offset(forward, 0);
    if grid.is_in_borders(one_step) && grid.field(one_step).is_none() {
        out.push(one_step);

        let two_step = one_step.offset(forward, 0);
        if location.row == pawn_starting_row(color, grid.size())
            && grid.is_in_borders(two_step)
            && grid.field(two_step).is_none()
        {
            out.push(two_step);
        }
    }

    for d_column in [-1, 1] {
        let target = location.offset(forward, d_column);
        if grid.piece_at(target).is_some_and(|p| p.is_enemy_of(color)) {
            out.push(target);
        }
    }

    out
}

pub fn pawn_can_move(grid: &mut BoardGrid, location: BoardLocation, color: Color) -> bool {
    let destinations = pawn_destinations(grid, location, color);
    has_safe_destination(grid, location, &destinations, color)
}
