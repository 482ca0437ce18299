//! Legal move enumeration for one side, plus a uniform random pick used by
//! playouts and benchmarks.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::Color;
use crate::moves::piece_rules::reachable_destinations;

/// A (from, to) pair that passed the self-check simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LegalMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
}

pub fn legal_moves(grid: &mut BoardGrid, color: Color) -> Vec<LegalMove> {
    let movers: Vec<_> = grid
        .pieces_of(color)
        .map(|piece| (piece.kind, piece.location))
        .collect();

    let mut out = Vec::new();
    for (kind, from) in movers {
        for to in reachable_destinations(grid, kind, color, from) {
            if !grid.simulate_check_state(from, to).includes(color) {
                out.push(LegalMove { from, to });
            }
        }
    }
    out
}

/// Uniformly chosen legal move, or `None` when the side has none.
pub fn random_legal_move<R: Rng + ?Sized>(
    grid: &mut BoardGrid,
    color: Color,
    rng: &mut R,
) -> Option<LegalMove> {
    legal_moves(grid, color).as_slice().choose(rng).copied()
}
