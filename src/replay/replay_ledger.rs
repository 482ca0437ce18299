//! Per-turn undo bookkeeping for the replay board.
//!
//! Two maps keyed by turn index: the piece captured on that turn, and the
//! (pawn, promoted piece) pair of a promotion on that turn. A capture and a
//! promotion may share a turn (a pawn capturing onto the last row). Entries
//! are consumed by the undo that reverses them.

use std::collections::HashMap;

use crate::chess_errors::ChessErrors;
use crate::piece_record::PieceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionEntry {
    pub pawn: PieceId,
    pub promoted: PieceId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayLedger {
    captures: HashMap<i32, PieceId>,
    promotions: HashMap<i32, PromotionEntry>,
}

impl ReplayLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self, turn: i32) -> Option<PieceId> {
        self.captures.get(&turn).copied()
    }

    pub fn promotion(&self, turn: i32) -> Option<PromotionEntry> {
        self.promotions.get(&turn).copied()
    }

    pub fn ensure_capture_free(&self, turn: i32) -> Result<(), ChessErrors> {
        if self.captures.contains_key(&turn) {
            return Err(ChessErrors::LedgerEntryExists { turn });
        }
        Ok(())
    }

    pub fn ensure_promotion_free(&self, turn: i32) -> Result<(), ChessErrors> {
        if self.promotions.contains_key(&turn) {
            return Err(ChessErrors::LedgerEntryExists { turn });
        }
        Ok(())
    }

    pub fn record_capture(&mut self, turn: i32, piece: PieceId) -> Result<(), ChessErrors> {
        self.ensure_capture_free(turn)?;
        self.captures.insert(turn, piece);
        Ok(())
    }

    pub fn record_promotion(&mut self, turn: i32, entry: PromotionEntry) -> Result<(), ChessErrors> {
        self.ensure_promotion_free(turn)?;
        self.promotions.insert(turn, entry);
        Ok(())
    }

    pub fn take_capture(&mut self, turn: i32) -> Option<PieceId> {
        self.captures.remove(&turn)
    }

    pub fn take_promotion(&mut self, turn: i32) -> Option<PromotionEntry> {
        self.promotions.remove(&turn)
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.promotions.is_empty()
    }

    pub fn clear(&mut self) {
        self.captures.clear();
        self.promotions.clear();
    }
}
