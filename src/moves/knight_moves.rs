use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::Color;
use crate::moves::direction_lookup::{
    has_safe_destination, is_enemy_king_at_location, offset_destinations, Direction,
};

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn knight_attacks_king(grid: &BoardGrid, location: BoardLocation, color: Color) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(d_row, d_column)| is_enemy_king_at_location(grid, location, d_row, d_column, color))
}

pub fn knight_destinations(grid: &BoardGrid, location: BoardLocation, color: Color) -> Vec<BoardLocation> {
    offset_destinations(grid, location, &KNIGHT_OFFSETS, color)
}

pub fn knight_can_move(grid: &mut BoardGrid, location: BoardLocation, color: Color) -> bool {
    let destinations = knight_destinations(grid, location, color);
    has_safe_destination(grid, location, &destinations, color)
}
