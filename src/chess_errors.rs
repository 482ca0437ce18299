//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type for the crate. Board queries treat
//! off-board coordinates as "no effect" and return negative answers instead of
//! errors; the variants below are reserved for accesses that must succeed and
//! for move-history input that does not match the board it is replayed on.
//!
//! Usage guidelines:
//! - Configuration variants (`InvalidBoardSize`, `InvalidLayout`,
//!   `InvalidConfig`) are fatal for the engine instance being built.
//! - Replay variants (`MissingPieceAtLocation`, `MissingLedgerEntry`,
//!   `LedgerEntryExists`, `UnrecognizedPromotionCode`,
//!   `PromotionColorMismatch`) mean the move list and
//!   the replay ledgers have desynchronized. They are reported before any
//!   state is touched, so the board stays usable.

use thiserror::Error;

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::piece_record::PieceId;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChessErrors {
    /// An unconditional grid access fell outside `[0, N)` on either axis.
    #[error("location {0} is outside the board")]
    OutOfBounds(BoardLocation),

    /// A move or undo expected a piece at this location and found none.
    ///
    /// Payload: the location that was expected to be occupied.
    #[error("no piece at {0}")]
    MissingPieceAtLocation(BoardLocation),

    /// A piece id that was never registered with this board.
    #[error("unknown piece id {0}")]
    UnknownPiece(PieceId),

    /// A legacy promotion marker that does not map to any promotion piece.
    #[error("unrecognized promotion code {0}")]
    UnrecognizedPromotionCode(i32),

    /// Promotion asked for something other than pawn -> knight/bishop/rook/queen.
    ///
    /// Payload: (promoted piece kind, requested kind).
    #[error("cannot promote a {0} into a {1}")]
    InvalidPromotion(PieceKind, PieceKind),

    /// A promotion record names a piece of the other color than the pawn.
    #[error("a {pawn} pawn cannot promote into a {piece} piece")]
    PromotionColorMismatch { pawn: Color, piece: Color },

    /// The promotion target square holds a piece other than the promoting pawn.
    #[error("location {0} is already occupied")]
    LocationOccupied(BoardLocation),

    /// A ledger already holds an entry for this turn; applying would lose it.
    #[error("ledger already holds an entry for turn {turn}")]
    LedgerEntryExists { turn: i32 },

    /// Undo of a removal or promotion for a turn the ledger knows nothing about.
    #[error("no ledger entry for turn {turn}")]
    MissingLedgerEntry { turn: i32 },

    /// The live board refused a move that would leave the mover in check, or
    /// that is not among the piece's reachable destinations.
    #[error("illegal move from {from} to {to}")]
    IllegalMove {
        from: BoardLocation,
        to: BoardLocation,
    },

    /// Grids must have at least one row and one column.
    #[error("invalid board size {0}")]
    InvalidBoardSize(usize),

    /// The starting layout string could not be parsed.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// The engine configuration could not be read.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
