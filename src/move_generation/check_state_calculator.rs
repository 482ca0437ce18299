//! Full-board check scan.
//!
//! Every occupied cell is asked whether its piece attacks the enemy king. A
//! Black attacker means White is in check and vice versa; the two flags are
//! accumulated over the whole grid and folded into a `SideColor`.

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::{Color, SideColor};
use crate::moves::piece_rules::is_attacking_king;

pub fn calculate_check(grid: &BoardGrid) -> SideColor {
    let mut white_check = false;
    let mut black_check = false;
    let size = grid.size() as i32;

    for row in 0..size {
        for column in 0..size {
            let location = BoardLocation::new(row, column);
            let Some(piece) = grid.piece_at(location) else {
                continue;
            };

            if is_attacking_king(grid, piece.kind, piece.color, location) {
                match piece.color {
                    Color::Black => white_check = true,
                    Color::White => black_check = true,
                }
            }
        }
    }

    SideColor::from_flags(white_check, black_check)
}
