//! Direction tables and the ray walks shared by the sliding pieces.
//!
//! A ray starts at the piece, steps one cell at a time along a direction
//! vector and stops at the first occupied cell or at the board edge.

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::{Color, PieceKind};

pub type Direction = (i32, i32);

pub const DIAGONAL_LOOKUP: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const VERTICAL_LOOKUP: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True when the cell one `(d_row, d_column)` step past `location` holds a
/// king that does not belong to `attacker_color`.
pub fn is_enemy_king_at_location(
    grid: &BoardGrid,
    location: BoardLocation,
    d_row: i32,
    d_column: i32,
    attacker_color: Color,
) -> bool {
    grid.piece_at(location.offset(d_row, d_column))
        .is_some_and(|piece| piece.kind == PieceKind::King && piece.is_enemy_of(attacker_color))
}

/// Ray-based king attack from `location`.
///
/// Each ray is walked until it leaves the board or meets an occupant. For a
/// ray that met an occupant, the walk backs up to the last free cell (the
/// origin when the occupant is adjacent) and tests one step further along
/// the same direction for an enemy king.
pub fn is_attacking_king_in_direction(
    grid: &BoardGrid,
    location: BoardLocation,
    lookup: &[Direction],
    attacker_color: Color,
) -> bool {
    for &(d_row, d_column) in lookup {
        let mut cursor = location;
        let mut occupant = None;

        while occupant.is_none() && grid.is_in_borders(cursor.offset(d_row, d_column)) {
            cursor = cursor.offset(d_row, d_column);
            occupant = grid.field(cursor);
        }

        if occupant.is_none() {
            continue;
        }

        let last_free = cursor.offset(-d_row, -d_column);
        if grid.is_in_borders(last_free)
            && is_enemy_king_at_location(grid, last_free, d_row, d_column, attacker_color)
        {
            return true;
        }
    }

    false
}

/// Cells a slider of `color` on `location` can reach along `lookup`: every
/// empty cell up to the first occupant, plus the occupant when it is an enemy.
pub fn ray_destinations(
    grid: &BoardGrid,
    location: BoardLocation,
    lookup: &[Direction],
    color: Color,
) -> Vec<BoardLocation> {
    let mut out = Vec::new();

    for &(d_row, d_column) in lookup {
        let mut cursor = location.offset(d_row, d_column);
        while grid.is_in_borders(cursor) {
            match grid.piece_at(cursor) {
                None => out.push(cursor),
                Some(piece) => {
                    if piece.is_enemy_of(color) {
                        out.push(cursor);
                    }
                    break;
                }
            }
            cursor = cursor.offset(d_row, d_column);
        }
    }

    out
}

/// On-board cells at the given offsets that are empty or hold an enemy.
pub fn offset_destinations(
    grid: &BoardGrid,
    location: BoardLocation,
    offsets: &[Direction],
    color: Color,
) -> Vec<BoardLocation> {
    offsets
        .iter()
        .map(|&(d_row, d_column)| location.offset(d_row, d_column))
        .filter(|&target| grid.is_in_borders(target))
        .filter(|&target| grid.piece_at(target).is_none_or(|p| p.is_enemy_of(color)))
        .collect()
}

/// True when some destination can be played without leaving `color` in
/// check. Stops at the first such destination.
pub fn has_safe_destination(
    grid: &mut BoardGrid,
    from: BoardLocation,
    destinations: &[BoardLocation],
    color: Color,
) -> bool {
    destinations
        .iter()
        .any(|&to| !grid.simulate_check_state(from, to).includes(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, pieces: &[(PieceKind, Color, i32, i32)]) -> BoardGrid {
        let mut grid = BoardGrid::new(size).unwrap();
        for &(kind, color, row, column) in pieces {
            grid.spawn_piece(kind, color, BoardLocation::new(row, column))
                .unwrap();
        }
        grid
    }

    #[test]
    fn open_ray_reaches_king_at_board_edge() {
        let grid = grid_with(
            8,
            &[
                (PieceKind::Rook, Color::White, 0, 0),
                (PieceKind::King, Color::Black, 0, 7),
            ],
        );
        assert!(is_attacking_king_in_direction(
            &grid,
            BoardLocation::new(0, 0),
            &VERTICAL_LOOKUP,
            Color::White
        ));
    }

    #[test]
    fn adjacent_king_is_found_from_origin() {
        let grid = grid_with(
            8,
            &[
                (PieceKind::Bishop, Color::Black, 4, 4),
                (PieceKind::King, Color::White, 5, 5),
            ],
        );
        assert!(is_attacking_king_in_direction(
            &grid,
            BoardLocation::new(4, 4),
            &DIAGONAL_LOOKUP,
            Color::Black
        ));
    }

    #[test]
    fn blocker_hides_king_and_other_rays_are_still_scanned() {
        // The first ray (+1,0) meets a pawn; the king sits on the (0,+1) ray.
        let grid = grid_with(
            8,
            &[
                (PieceKind::Rook, Color::White, 3, 3),
                (PieceKind::Pawn, Color::White, 4, 3),
                (PieceKind::King, Color::Black, 6, 3),
                (PieceKind::King, Color::Black, 3, 6),
            ],
        );
        assert!(is_attacking_king_in_direction(
            &grid,
            BoardLocation::new(3, 3),
            &VERTICAL_LOOKUP,
            Color::White
        ));

        let blocked = grid_with(
            8,
            &[
                (PieceKind::Rook, Color::White, 3, 3),
                (PieceKind::Pawn, Color::White, 4, 3),
                (PieceKind::King, Color::Black, 6, 3),
            ],
        );
        assert!(!is_attacking_king_in_direction(
            &blocked,
            BoardLocation::new(3, 3),
            &VERTICAL_LOOKUP,
            Color::White
        ));
    }

    #[test]
    fn own_king_is_never_a_target() {
        let grid = grid_with(
            8,
            &[
                (PieceKind::Queen, Color::White, 0, 0),
                (PieceKind::King, Color::White, 0, 5),
            ],
        );
        assert!(!is_attacking_king_in_direction(
            &grid,
            BoardLocation::new(0, 0),
            &VERTICAL_LOOKUP,
            Color::White
        ));
    }

    #[test]
    fn ray_destinations_stop_at_first_occupant() {
        let grid = grid_with(
            4,
            &[
                (PieceKind::Rook, Color::White, 0, 0),
                (PieceKind::Pawn, Color::Black, 2, 0),
                (PieceKind::Pawn, Color::White, 0, 2),
            ],
        );
        let mut destinations =
            ray_destinations(&grid, BoardLocation::new(0, 0), &VERTICAL_LOOKUP, Color::White);
        destinations.sort();
        assert_eq!(
            destinations,
            vec![
                BoardLocation::new(0, 1),
                BoardLocation::new(1, 0),
                BoardLocation::new(2, 0),
            ]
        );
    }

    #[test]
    fn offset_destinations_skip_friendly_and_off_board_cells() {
        let grid = grid_with(
            3,
            &[
                (PieceKind::King, Color::White, 0, 0),
                (PieceKind::Pawn, Color::White, 1, 0),
                (PieceKind::Pawn, Color::Black, 1, 1),
            ],
        );
        let mut destinations = offset_destinations(
            &grid,
            BoardLocation::new(0, 0),
            &[(1, 0), (1, 1), (0, 1), (-1, 0)],
            Color::White,
        );
        destinations.sort();
        assert_eq!(
            destinations,
            vec![BoardLocation::new(0, 1), BoardLocation::new(1, 1)]
        );
    }
}
