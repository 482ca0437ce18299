//! Hooks the rules engine calls out to.
//!
//! The engine never talks to a renderer, a move-list UI or a game loop
//! directly. Those live outside the crate and plug in through the traits
//! below. Every hook is fire-and-forget: the engine does not read anything
//! back except the turn counter.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::piece_record::PieceId;

/// Horizontal placement of a piece in the renderer's world space.
///
/// Only the two board-plane axes are produced. The vertical offset belongs to
/// the renderer and is kept by it unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPosition {
    pub x: f32,
    pub z: f32,
}

impl WorldPosition {
    /// Linear mapping from a board cell to world coordinates.
    pub fn from_location(location: BoardLocation, square_scale: f32) -> Self {
        Self {
            x: location.row as f32 * square_scale,
            z: location.column as f32 * square_scale,
        }
    }
}

/// Rendering, piece-factory and activation side of the surrounding application.
pub trait BoardView {
    /// A new piece was registered with the board (setup or promotion).
    fn piece_spawned(&mut self, _piece: PieceId, _kind: PieceKind, _color: Color) {}

    /// The piece now stands at `position`.
    fn set_piece_position(&mut self, _piece: PieceId, _position: WorldPosition) {}

    /// The piece was captured, promoted away, or brought back by an undo/reset.
    fn set_piece_active(&mut self, _piece: PieceId, _active: bool) {}
}

/// View that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl BoardView for NullView {}

/// External move-history owner, told about promotions as they happen.
pub trait MoveTracker {
    fn add_move(&mut self, row: i32, column: i32, old_code: i32, new_code: i32, turn: i32);
}

/// Process-wide turn counter owned by the game loop.
pub trait TurnCounter {
    fn turn_count(&self) -> i32;
}

impl TurnCounter for i32 {
    fn turn_count(&self) -> i32 {
        *self
    }
}

impl MoveTracker for Vec<(i32, i32, i32, i32, i32)> {
    fn add_move(&mut self, row: i32, column: i32, old_code: i32, new_code: i32, turn: i32) {
        self.push((row, column, old_code, new_code, turn));
    }
}
