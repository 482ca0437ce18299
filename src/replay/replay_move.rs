//! Replay move records and their legacy coordinate encoding.
//!
//! Recorded games store every move as a (start, end) pair of coordinates and
//! overload negative rows to mark special records:
//!
//! | start row | end row | meaning                                        |
//! |-----------|---------|------------------------------------------------|
//! | any       | `-1`    | remove the piece on `start`, nothing arrives   |
//! | `-1`      | any     | continuation of an already-applied removal      |
//! | `>= 0`    | `< -1`  | promote the pawn on `start`, code in end row   |
//! | `< -1`    | `>= 0`  | promote the pawn on `end`, code in start row   |
//! | `>= 0`    | `>= 0`  | ordinary move or capture                       |
//!
//! Rows are tested in that order. `ReplayMove` is the decoded form that the
//! replay board works with. `MoveRecord` is the stored form of one history
//! entry and serializes to JSON for saved games.

use serde::{Deserialize, Serialize};

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind};

/// Row marker for "remove the piece at start" and for skip continuations.
pub const REMOVAL_MARKER: i32 = -1;

/// Piece a pawn turns into, as carried by a promotion record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromotionPiece {
    pub kind: PieceKind,
    pub color: Color,
}

const PROMOTION_CODES: [(i32, PieceKind, Color); 8] = [
    (-2, PieceKind::Queen, Color::White),
    (-3, PieceKind::Queen, Color::Black),
    (-4, PieceKind::Rook, Color::White),
    (-5, PieceKind::Rook, Color::Black),
    (-6, PieceKind::Bishop, Color::White),
    (-7, PieceKind::Bishop, Color::Black),
    (-8, PieceKind::Knight, Color::White),
    (-9, PieceKind::Knight, Color::Black),
];

impl PromotionPiece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn from_code(code: i32) -> Result<Self, ChessErrors> {
        PROMOTION_CODES
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|&(_, kind, color)| Self { kind, color })
            .ok_or(ChessErrors::UnrecognizedPromotionCode(code))
    }

    /// Legacy code, or `None` for kinds a pawn cannot promote to.
    pub fn code(self) -> Option<i32> {
        PROMOTION_CODES
            .iter()
            .find(|(_, kind, color)| *kind == self.kind && *color == self.color)
            .map(|&(code, _, _)| code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplayMove {
    /// Move the piece on `from` to `to`, capturing whatever stood there.
    Ordinary {
        from: BoardLocation,
        to: BoardLocation,
    },
    /// Take the piece on `at` off the board (en-passant victim).
    Removal { at: BoardLocation },
    /// Replace the pawn on `from` with `piece`, placed on `to`.
    Promotion {
        from: BoardLocation,
        to: BoardLocation,
        piece: PromotionPiece,
    },
    /// Second half of a two-record capture whose effect was already applied.
    SkipContinuation,
}

impl ReplayMove {
    /// Promotion in place, as recorded by the live board.
    pub const fn promotion_at(at: BoardLocation, piece: PromotionPiece) -> Self {
        ReplayMove::Promotion {
            from: at,
            to: at,
            piece,
        }
    }

    pub fn decode(start: BoardLocation, end: BoardLocation) -> Result<Self, ChessErrors> {
        if end.row == REMOVAL_MARKER {
            return Ok(ReplayMove::Removal { at: start });
        }
        if start.row == REMOVAL_MARKER {
            return Ok(ReplayMove::SkipContinuation);
        }
        if end.row < REMOVAL_MARKER {
            let piece = PromotionPiece::from_code(end.row)?;
            return Ok(ReplayMove::promotion_at(start, piece));
        }
        if start.row < REMOVAL_MARKER {
            let piece = PromotionPiece::from_code(start.row)?;
            return Ok(ReplayMove::promotion_at(end, piece));
        }
        Ok(ReplayMove::Ordinary {
            from: start,
            to: end,
        })
    }

    /// Legacy (start, end) pair. Promotions that move the piece while
    /// promoting, or promote to a kind with no code, have no legacy form.
    pub fn encode(self) -> Option<(BoardLocation, BoardLocation)> {
        match self {
            ReplayMove::Ordinary { from, to } => Some((from, to)),
            ReplayMove::Removal { at } => {
                Some((at, BoardLocation::new(REMOVAL_MARKER, REMOVAL_MARKER)))
            }
            ReplayMove::SkipContinuation => Some((
                BoardLocation::new(REMOVAL_MARKER, REMOVAL_MARKER),
                BoardLocation::new(0, 0),
            )),
            ReplayMove::Promotion { from, to, piece } if from == to => {
                let code = piece.code()?;
                Some((from, BoardLocation::new(code, code)))
            }
            ReplayMove::Promotion { .. } => None,
        }
    }
}

/// One history entry: the legacy coordinate pair, the kind of the moving
/// piece before and after the move, and the turn it was played on.
///
/// `kind_before` and `kind_after` differ only on a promotion. A promotion
/// reported through `MoveTracker::add_move(row, column, old_code, new_code,
/// turn)` stores `start = (row, column)` and `end = (old_code, new_code)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub start: BoardLocation,
    pub end: BoardLocation,
    pub kind_before: PieceKind,
    pub kind_after: PieceKind,
    pub turn: i32,
}

impl MoveRecord {
    /// Decoded form. A promotion whose code disagrees with `kind_after`, or a
    /// non-promotion that changes kind, is `InvalidPromotion`.
    pub fn to_replay_move(&self) -> Result<ReplayMove, ChessErrors> {
        let decoded = ReplayMove::decode(self.start, self.end)?;
        let consistent = match decoded {
            ReplayMove::Promotion { piece, .. } => {
                self.kind_before == PieceKind::Pawn && piece.kind == self.kind_after
            }
            _ => self.kind_before == self.kind_after,
        };
        if !consistent {
            return Err(ChessErrors::InvalidPromotion(self.kind_before, self.kind_after));
        }
        Ok(decoded)
    }
}
