use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::Color;
use crate::moves::direction_lookup::{
    has_safe_destination, is_enemy_king_at_location, offset_destinations, Direction,
};

pub const KING_OFFSETS: [Direction; 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub fn king_attacks_king(grid: &BoardGrid, location: BoardLocation, color: Color) -> bool {
    KING_OFFSETS
        .iter()
        .any(|&(d_row, d_column)| is_enemy_king_at_location(grid, location, d_row, d_column, color))
}

pub fn king_destinations(grid: &BoardGrid, location: BoardLocation, color: Color) -> Vec<BoardLocation> {
    offset_destinations(grid, location, &KING_OFFSETS, color)
}

pub fn king_can_move(grid: &mut BoardGrid, location: BoardLocation, color: Color) -> bool {
    let destinations = king_destinations(grid, location, color);
    has_safe_destination(grid, location, &destinations, color)
}
