use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::Color;
use crate::moves::direction_lookup::{
    has_safe_destination, is_attacking_king_in_direction, ray_destinations, VERTICAL_LOOKUP,
};

#[inline]
pub fn rook_attacks_king(grid: &BoardGrid, location: BoardLocation, color: Color) -> bool {
    is_attacking_king_in_direction(grid, location, &VERTICAL_LOOKUP, color)
}

pub fn rook_destinations(grid: &BoardGrid, location: BoardLocation, color: Color) -> Vec<BoardLocation> {
    ray_destinations(grid, location, &VERTICAL_LOOKUP, color)
}

pub fn rook_can_move(grid: &mut BoardGrid, location: BoardLocation, color: Color) -> bool {
    let destinations = rook_destinations(grid, location, color);
    has_safe_destination(grid, location, &destinations, color)
}
