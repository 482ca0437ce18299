use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::utils::layout_parser::piece_to_layout_char;

/// Placement string for the grid's current occupancy, in the notation
/// `parse_layout` reads.
pub fn generate_layout(grid: &BoardGrid) -> String {
    let size = grid.size();
    let mut out = String::new();

    for row in (0..size).rev() {
        let mut empty_count = 0usize;

        for column in 0..size {
            let location = BoardLocation::new(row as i32, column as i32);
            if let Some(piece) = grid.piece_at(location) {
                if empty_count > 0 {
                    out.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                out.push(piece_to_layout_char(piece.color, piece.kind));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_LAYOUT;
    use crate::utils::layout_parser::parse_layout;

    fn grid_from(layout: &str, size: usize) -> BoardGrid {
        let mut grid = BoardGrid::new(size).unwrap();
        for spec in parse_layout(layout, size).unwrap() {
            grid.spawn_piece(spec.kind, spec.color, spec.location).unwrap();
        }
        grid
    }

    #[test]
    fn starting_position_regenerates_its_layout() {
        assert_eq!(generate_layout(&grid_from(STARTING_LAYOUT, 8)), STARTING_LAYOUT);
    }

    #[test]
    fn wide_empty_runs_use_multi_digit_counts() {
        let layout = "k11/12/12/12/12/12/12/12/12/12/12/10QK";
        assert_eq!(generate_layout(&grid_from(layout, 12)), layout);
    }

    #[test]
    fn moved_piece_shows_up_on_its_new_cell() {
        let mut grid = grid_from("k4/5/5/5/R3K", 5);
        let rook = grid.field(BoardLocation::new(0, 0)).unwrap();
        grid.set(rook, BoardLocation::new(3, 2)).unwrap();
        assert_eq!(generate_layout(&grid), "k4/2R2/5/5/4K");
    }
}
