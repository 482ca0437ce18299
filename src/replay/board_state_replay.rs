//! Replay board: rebuilds a recorded game forward and backward.
//!
//! The replay board keeps its own grid, separate from the live board, and
//! never evaluates piece rules. It moves stored pieces around according to
//! `ReplayMove` records and keeps a per-turn ledger so that every applied
//! record can be reversed exactly.
//!
//! Lifecycle: a new board is `Empty`. `initialize_grid` (or the first applied
//! move) makes it `Active`; `reset` returns it to `Empty` with every piece
//! back on its starting cell.

use log::{debug, warn};

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::collaborators::{BoardView, NullView, WorldPosition};
use crate::game_state::engine_config::EngineConfig;
use crate::piece_record::{PieceId, PieceSpec};
use crate::replay::replay_ledger::{PromotionEntry, ReplayLedger};
use crate::replay::replay_move::{MoveRecord, PromotionPiece, ReplayMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPhase {
    Empty,
    Active,
}

pub struct BoardStateReplay {
    grid: BoardGrid,
    starting_piece_count: usize,
    square_scale: f32,
    ledger: ReplayLedger,
    phase: ReplayPhase,
    view: Box<dyn BoardView>,
}

impl BoardStateReplay {
    pub fn new(config: &EngineConfig) -> Result<Self, ChessErrors> {
        config.validate()?;
        let pieces = config.starting_pieces()?;
        Self::from_pieces(config.board_size, &pieces, config.square_scale)
    }

    pub fn from_pieces(
        board_size: usize,
        pieces: &[PieceSpec],
        square_scale: f32,
    ) -> Result<Self, ChessErrors> {
        let mut grid = BoardGrid::new(board_size)?;
        for spec in pieces {
            if grid.field(spec.location).is_some() {
                return Err(ChessErrors::LocationOccupied(spec.location));
            }
            grid.spawn_piece(spec.kind, spec.color, spec.location)?;
        }

        Ok(Self {
            starting_piece_count: grid.pieces().len(),
            grid,
            square_scale,
            ledger: ReplayLedger::new(),
            phase: ReplayPhase::Empty,
            view: Box::new(NullView),
        })
    }

    pub fn with_view(mut self, view: Box<dyn BoardView>) -> Self {
        self.view = view;
        self
    }

    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    pub fn ledger(&self) -> &ReplayLedger {
        &self.ledger
    }

    pub fn phase(&self) -> ReplayPhase {
        self.phase
    }

    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    /// Puts every starting piece back on its starting cell, forgets all ledger
    /// entries and promoted pieces, and marks the board active.
    pub fn initialize_grid(&mut self) {
        self.restore_start();
        self.phase = ReplayPhase::Active;
    }

    /// Same cleanup as `initialize_grid`, leaving the board empty of history.
    pub fn reset(&mut self) {
        self.restore_start();
        self.phase = ReplayPhase::Empty;
    }

    fn restore_start(&mut self) {
        for dropped in self.grid.restore_starting_positions(self.starting_piece_count) {
            self.view.set_piece_active(dropped, false);
        }
        self.ledger.clear();
        for idx in 0..self.grid.pieces().len() {
            let piece = self.grid.pieces()[idx];
            self.view.set_piece_active(piece.id, true);
            self.place_in_view(piece.id, piece.location);
        }
    }

    fn place_in_view(&mut self, piece: PieceId, location: BoardLocation) {
        self.view
            .set_piece_position(piece, WorldPosition::from_location(location, self.square_scale));
    }

    fn require_in_borders(&self, location: BoardLocation) -> Result<(), ChessErrors> {
        if self.grid.is_in_borders(location) {
            Ok(())
        } else {
            Err(ChessErrors::OutOfBounds(location))
        }
    }

    fn require_piece(&self, location: BoardLocation) -> Result<PieceId, ChessErrors> {
        self.require_in_borders(location)?;
        self.grid
            .field(location)
            .ok_or(ChessErrors::MissingPieceAtLocation(location))
    }

    fn require_empty(&self, location: BoardLocation) -> Result<(), ChessErrors> {
        self.require_in_borders(location)?;
        match self.grid.field(location) {
            None => Ok(()),
            Some(_) => Err(ChessErrors::LocationOccupied(location)),
        }
    }

    /// Decodes a legacy (start, end) record and applies it.
    pub fn move_piece(
        &mut self,
        start: BoardLocation,
        end: BoardLocation,
        turn: i32,
    ) -> Result<(), ChessErrors> {
        let record = ReplayMove::decode(start, end)?;
        self.apply_move(record, turn)
    }

    /// Decodes a legacy (start, end) record and reverses it.
    pub fn undo_encoded(
        &mut self,
        start: BoardLocation,
        end: BoardLocation,
        turn: i32,
    ) -> Result<(), ChessErrors> {
        let record = ReplayMove::decode(start, end)?;
        self.undo_move(record, turn)
    }

    /// Applies a stored history entry on its own turn.
    pub fn apply_record(&mut self, record: &MoveRecord) -> Result<(), ChessErrors> {
        let decoded = record.to_replay_move()?;
        self.apply_move(decoded, record.turn)
    }

    /// Reverses a stored history entry applied with `apply_record`.
    pub fn undo_record(&mut self, record: &MoveRecord) -> Result<(), ChessErrors> {
        let decoded = record.to_replay_move()?;
        self.undo_move(decoded, record.turn)
    }

    /// Plays `record` forward as turn `turn`.
    ///
    /// All checks run before the board is touched, so an error leaves the
    /// board and ledger exactly as they were.
    pub fn apply_move(&mut self, record: ReplayMove, turn: i32) -> Result<(), ChessErrors> {
        if self.phase == ReplayPhase::Empty {
            self.initialize_grid();
        }

        let result = match record {
            ReplayMove::Ordinary { from, to } => self.apply_ordinary(from, to, turn),
            ReplayMove::Removal { at } => self.apply_removal(at, turn),
            ReplayMove::Promotion { from, to, piece } => self.apply_promotion(from, to, piece, turn),
            ReplayMove::SkipContinuation => Ok(()),
        };

        match &result {
            Ok(()) => debug!("replay apply turn {turn}: {record:?}"),
            Err(e) => warn!("replay apply turn {turn} rejected: {e}"),
        }
        result
    }

    fn apply_ordinary(&mut self, from: BoardLocation, to: BoardLocation, turn: i32) -> Result<(), ChessErrors> {
        let mover = self.require_piece(from)?;
        self.require_in_borders(to)?;
        if from == to {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        if let Some(captured) = self.grid.field(to) {
            self.ledger.record_capture(turn, captured)?;
            self.grid.set_active(captured, false)?;
            self.view.set_piece_active(captured, false);
        }

        self.grid.set(mover, to)?;
        self.place_in_view(mover, to);
        Ok(())
    }

    fn apply_removal(&mut self, at: BoardLocation, turn: i32) -> Result<(), ChessErrors> {
        let victim = self.require_piece(at)?;
        self.ledger.record_capture(turn, victim)?;
        self.grid.set_active(victim, false)?;
        self.grid.clear(at)?;
        self.view.set_piece_active(victim, false);
        Ok(())
    }

    fn apply_promotion(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        piece: PromotionPiece,
        turn: i32,
    ) -> Result<(), ChessErrors> {
        let pawn = self.require_piece(from)?;
        self.require_in_borders(to)?;

        let pawn_record = *self.grid.piece(pawn)?;
        if pawn_record.kind != PieceKind::Pawn || !piece.kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotion(pawn_record.kind, piece.kind));
        }
        if pawn_record.color != piece.color {
            return Err(ChessErrors::PromotionColorMismatch {
                pawn: pawn_record.color,
                piece: piece.color,
            });
        }
        if self.grid.field(to).is_some_and(|id| id != pawn) {
            return Err(ChessErrors::LocationOccupied(to));
        }
        self.ledger.ensure_promotion_free(turn)?;

        self.grid.clear(from)?;
        self.grid.set_active(pawn, false)?;
        self.view.set_piece_active(pawn, false);

        let promoted = self.grid.spawn_piece(piece.kind, piece.color, to)?;
        self.view.piece_spawned(promoted, piece.kind, piece.color);
        self.place_in_view(promoted, to);

        self.ledger
            .record_promotion(turn, PromotionEntry { pawn, promoted })?;
        Ok(())
    }

    /// Reverses `record`, previously applied as turn `turn`.
    ///
    /// An ordinary move with no capture recorded for `turn` just vacates its
    /// destination. Removals and promotions are different: without a ledger
    /// entry there is no piece to bring back, and vacating the cell would
    /// erase whatever stands there now (for an in-place promotion, the pawn
    /// itself). Those undos return `MissingLedgerEntry` and leave the board
    /// unchanged.
    pub fn undo_move(&mut self, record: ReplayMove, turn: i32) -> Result<(), ChessErrors> {
        let result = match record {
            ReplayMove::Ordinary { from, to } => self.undo_ordinary(from, to, turn),
            ReplayMove::Removal { at } => self.undo_removal(at, turn),
            ReplayMove::Promotion { from, to, .. } => self.undo_promotion(from, to, turn),
            ReplayMove::SkipContinuation => Ok(()),
        };

        match &result {
            Ok(()) => debug!("replay undo turn {turn}: {record:?}"),
            Err(e) => warn!("replay undo turn {turn} rejected: {e}"),
        }
        result
    }

    fn undo_ordinary(&mut self, from: BoardLocation, to: BoardLocation, turn: i32) -> Result<(), ChessErrors> {
        let mover = self.require_piece(to)?;
        self.require_empty(from)?;

        self.grid.set(mover, from)?;
        self.place_in_view(mover, from);

        if let Some(captured) = self.ledger.take_capture(turn) {
            self.grid.set(captured, to)?;
            self.grid.set_active(captured, true)?;
            self.view.set_piece_active(captured, true);
            self.place_in_view(captured, to);
        }
        Ok(())
    }

    fn undo_removal(&mut self, at: BoardLocation, turn: i32) -> Result<(), ChessErrors> {
        self.require_empty(at)?;
        let victim = self
            .ledger
            .captured(turn)
            .ok_or(ChessErrors::MissingLedgerEntry { turn })?;
        self.ledger.take_capture(turn);

        self.grid.set(victim, at)?;
        self.grid.set_active(victim, true)?;
        self.view.set_piece_active(victim, true);
        self.place_in_view(victim, at);
        Ok(())
    }

    fn undo_promotion(&mut self, from: BoardLocation, to: BoardLocation, turn: i32) -> Result<(), ChessErrors> {
        let entry = self
            .ledger
            .promotion(turn)
            .ok_or(ChessErrors::MissingLedgerEntry { turn })?;
        if self.require_piece(to)? != entry.promoted {
            return Err(ChessErrors::MissingPieceAtLocation(to));
        }
        if from != to {
            self.require_empty(from)?;
        }
        self.ledger.take_promotion(turn);

        self.grid.clear(to)?;
        self.grid.set_active(entry.promoted, false)?;
        self.view.set_piece_active(entry.promoted, false);

        self.grid.set(entry.pawn, from)?;
        self.grid.set_active(entry.pawn, true)?;
        self.view.set_piece_active(entry.pawn, true);
        self.place_in_view(entry.pawn, from);

        // The promoted piece was the newest registration; drop it so the arena
        // matches its pre-promotion shape.
        if entry.promoted + 1 == self.grid.pieces().len() {
            self.grid.truncate_pieces(entry.promoted);
        }
        Ok(())
    }
}
