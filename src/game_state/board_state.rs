//! Authoritative live board.
//!
//! `BoardState` owns the grid for the game being played, the list of pieces it
//! was set up with and the view it reports to. Rule questions (check, game
//! end, whether a piece can move) are answered eagerly from the grid on every
//! call.

use log::{debug, warn};

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::{Color, PieceKind, SideColor};
use crate::game_state::collaborators::{BoardView, MoveTracker, NullView, TurnCounter, WorldPosition};
use crate::game_state::engine_config::EngineConfig;
use crate::move_generation::game_end_calculator::check_if_game_end;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMove};
use crate::moves::pawn_moves::pawn_promotion_row;
use crate::moves::piece_rules::{can_move, reachable_destinations};
use crate::piece_record::{PieceId, PieceRecord, PieceSpec};
use crate::replay::replay_move::PromotionPiece;
use crate::utils::layout_generator::generate_layout;

pub struct BoardState {
    grid: BoardGrid,
    starting_piece_count: usize,
    square_scale: f32,
    view: Box<dyn BoardView>,
}

impl BoardState {
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
            view: Box::new(NullView),
        })
    }

    /// Attaches a view and announces every piece to it.
    pub fn with_view(mut self, view: Box<dyn BoardView>) -> Self {
        self.view = view;
        for idx in 0..self.grid.pieces().len() {
            let piece = self.grid.pieces()[idx];
            self.view.piece_spawned(piece.id, piece.kind, piece.color);
        }
        self.initialize_grid();
        self
    }

    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    /// Rebuilds the cells from the stored piece locations and pushes every
    /// active piece's position to the view.
    pub fn initialize_grid(&mut self) {
        self.grid.rebuild_cells();
        for idx in 0..self.grid.pieces().len() {
            let piece = self.grid.pieces()[idx];
            if piece.active {
                self.place_in_view(piece.id, piece.location);
            }
        }
    }

    fn place_in_view(&mut self, piece: PieceId, location: BoardLocation) {
        self.view
            .set_piece_position(piece, WorldPosition::from_location(location, self.square_scale));
    }

    pub fn get(&self, location: BoardLocation) -> Result<Option<&PieceRecord>, ChessErrors> {
        self.grid.get(location)
    }

    pub fn set(&mut self, piece: PieceId, location: BoardLocation) -> Result<(), ChessErrors> {
        self.grid.set(piece, location)?;
        self.place_in_view(piece, location);
        Ok(())
    }

    pub fn clear(&mut self, location: BoardLocation) -> Result<(), ChessErrors> {
        self.grid.clear(location)
    }

    #[inline]
    pub fn is_in_borders(&self, location: BoardLocation) -> bool {
        self.grid.is_in_borders(location)
    }

    pub fn calculate_check_state(&self) -> SideColor {
        self.grid.calculate_check_state()
    }

    pub fn simulate_check_state(&mut self, from: BoardLocation, to: BoardLocation) -> SideColor {
        self.grid.simulate_check_state(from, to)
    }

    pub fn check_if_game_over(&mut self) -> SideColor {
        check_if_game_end(&mut self.grid)
    }

    /// Whether the piece on `location` has any legal move. Empty and
    /// off-board cells answer `false`.
    pub fn can_move(&mut self, location: BoardLocation) -> bool {
        let Some(piece) = self.grid.piece_at(location).copied() else {
            return false;
        };
        can_move(&mut self.grid, piece.kind, piece.color, location)
    }

    pub fn legal_moves(&mut self, color: Color) -> Vec<LegalMove> {
        legal_moves(&mut self.grid, color)
    }

    /// Commits a move after checking it against the piece's geometry and the
    /// self-check simulation. Returns the captured piece, if any.
    pub fn make_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<Option<PieceId>, ChessErrors> {
        let mover = *self
            .grid
            .get(from)?
            .ok_or(ChessErrors::MissingPieceAtLocation(from))?;

        let reachable = reachable_destinations(&self.grid, mover.kind, mover.color, from);
        if !reachable.contains(&to) || self.grid.simulate_check_state(from, to).includes(mover.color) {
            warn!("rejected {} {} move {from} -> {to}", mover.color, mover.kind);
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let captured = self.grid.field(to);
        if let Some(victim) = captured {
            self.grid.set_active(victim, false)?;
            self.view.set_piece_active(victim, false);
        }
        self.set(mover.id, to)?;

        debug!("{} {} {from} -> {to}", mover.color, mover.kind);
        Ok(captured)
    }

    /// Whether `location` holds an active pawn standing on its promotion row.
    pub fn awaits_promotion(&self, location: BoardLocation) -> bool {
        self.grid.piece_at(location).is_some_and(|piece| {
            piece.active
                && piece.kind == PieceKind::Pawn
                && location.row == pawn_promotion_row(piece.color, self.grid.size())
        })
    }

    /// Replaces the pawn with a new `kind` piece on the same cell. The pawn
    /// must stand on its promotion row.
    ///
    /// The move tracker is told about the promotion as
    /// `(row, column, code, code, turn_count - 1)` where `code` is the legacy
    /// promotion code of the new piece.
    pub fn promote_pawn(
        &mut self,
        pawn_location: BoardLocation,
        kind: PieceKind,
        tracker: &mut dyn MoveTracker,
        turns: &dyn TurnCounter,
    ) -> Result<PieceId, ChessErrors> {
        let pawn = *self
            .grid
            .get(pawn_location)?
            .ok_or(ChessErrors::MissingPieceAtLocation(pawn_location))?;
        if !self.awaits_promotion(pawn_location) {
            return Err(ChessErrors::InvalidPromotion(pawn.kind, kind));
        }
        let code = PromotionPiece::new(kind, pawn.color)
            .code()
            .ok_or(ChessErrors::InvalidPromotion(pawn.kind, kind))?;

        tracker.add_move(
            pawn_location.row,
            pawn_location.column,
            code,
            code,
            turns.turn_count() - 1,
        );

        let promoted = self.grid.spawn_piece(kind, pawn.color, pawn_location)?;
        self.grid.set_active(pawn.id, false)?;

        self.view.piece_spawned(promoted, kind, pawn.color);
        self.place_in_view(promoted, pawn_location);
        self.view.set_piece_active(pawn.id, false);

        debug!("promoted {} pawn on {pawn_location} to {kind}", pawn.color);
        Ok(promoted)
    }

    /// Sends every starting piece back to its starting cell, reactivates it,
    /// discards promoted pieces and rebuilds the grid.
    pub fn reset_pieces(&mut self) {
        for dropped in self.grid.restore_starting_positions(self.starting_piece_count) {
            self.view.set_piece_active(dropped, false);
        }
        for idx in 0..self.grid.pieces().len() {
            self.view.set_piece_active(self.grid.pieces()[idx].id, true);
        }
        self.initialize_grid();
        debug!("board reset to {}", generate_layout(&self.grid));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::collaborators::testing::{RecordingView, ViewEvent};

    fn loc(row: i32, column: i32) -> BoardLocation {
        BoardLocation::new(row, column)
    }

    fn board(layout: &str, size: usize) -> BoardState {
        BoardState::new(&EngineConfig::with_layout(size, layout)).unwrap()
    }

    #[test]
    fn rook_check_follows_king_position() {
        let mut state = board("k7/8/8/8/8/8/8/R7", 8);
        assert_eq!(state.calculate_check_state(), SideColor::Black);

        let king = state.get(loc(7, 0)).unwrap().unwrap().id;
        state.set(king, loc(6, 6)).unwrap();
        assert_eq!(state.calculate_check_state(), SideColor::None);
    }

    #[test]
    fn rook_and_king_sharing_row_zero() {
        let mut state = board("8/8/8/8/8/8/8/R6k", 8);
        assert_eq!(state.calculate_check_state(), SideColor::Black);

        let king = state.get(loc(0, 7)).unwrap().unwrap().id;
        state.set(king, loc(1, 7)).unwrap();
        assert_eq!(state.calculate_check_state(), SideColor::None);
    }

    #[test]
    fn make_move_refuses_self_check_and_bad_geometry() {
        let mut state = board("4r2k/8/8/8/8/8/4B3/4K3", 8);
        let before = state.grid().clone();

        assert_eq!(
            state.make_move(loc(1, 4), loc(2, 5)),
            Err(ChessErrors::IllegalMove {
                from: loc(1, 4),
                to: loc(2, 5)
            })
        );
        assert_eq!(
            state.make_move(loc(0, 4), loc(2, 4)),
            Err(ChessErrors::IllegalMove {
                from: loc(0, 4),
                to: loc(2, 4)
            })
        );
        assert_eq!(state.grid(), &before);
    }

    #[test]
    fn make_move_captures_by_deactivating() {
        let mut state = board("7k/8/8/8/8/2n5/8/R6K", 8);
        state.make_move(loc(0, 0), loc(2, 0)).unwrap();
        let captured = state.make_move(loc(2, 0), loc(2, 2)).unwrap().unwrap();

        assert!(!state.grid().piece(captured).unwrap().active);
        assert_eq!(state.get(loc(2, 2)).unwrap().unwrap().kind, PieceKind::Rook);
    }

    #[test]
    fn promotion_notifies_tracker_and_reset_discards_it() {
        let view = RecordingView::default();
        let events = view.events.clone();
        let mut state = board("k7/P7/8/8/8/8/8/7K", 8).with_view(Box::new(view));
        state.make_move(loc(6, 0), loc(7, 0)).unwrap_err();

        let pawn = state.get(loc(6, 0)).unwrap().unwrap().id;
        let king = state.get(loc(7, 0)).unwrap().unwrap().id;
        state.set(king, loc(7, 2)).unwrap();
        state.make_move(loc(6, 0), loc(7, 0)).unwrap();

        let mut tracker: Vec<(i32, i32, i32, i32, i32)> = Vec::new();
        let queen = state
            .promote_pawn(loc(7, 0), PieceKind::Queen, &mut tracker, &11)
            .unwrap();

        assert_eq!(tracker, vec![(7, 0, -2, -2, 10)]);
        assert_eq!(state.get(loc(7, 0)).unwrap().unwrap().id, queen);
        assert!(!state.grid().piece(pawn).unwrap().active);
        assert!(events
            .borrow()
            .contains(&ViewEvent::Spawned(queen, PieceKind::Queen, Color::White)));

        state.reset_pieces();
        assert_eq!(generate_layout(state.grid()), "k7/P7/8/8/8/8/8/7K");
        assert_eq!(state.grid().pieces().len(), 3);
        assert_eq!(state.get(loc(6, 0)).unwrap().unwrap().id, pawn);
        assert_eq!(state.get(loc(7, 0)).unwrap().unwrap().id, king);
        assert!(events.borrow().contains(&ViewEvent::Active(queen, false)));
    }

    #[test]
    fn promoting_into_king_is_rejected_without_notification() {
        let mut state = board("k7/8/8/8/8/8/8/p6K", 8);
        assert!(state.awaits_promotion(loc(0, 0)));
        let mut tracker: Vec<(i32, i32, i32, i32, i32)> = Vec::new();
        assert_eq!(
            state.promote_pawn(loc(0, 0), PieceKind::King, &mut tracker, &1),
            Err(ChessErrors::InvalidPromotion(PieceKind::Pawn, PieceKind::King))
        );
        assert!(tracker.is_empty());
    }

    #[test]
    fn pawn_short_of_its_last_row_cannot_promote() {
        let mut state = board("k7/8/P7/8/8/8/8/7K", 8);
        assert!(!state.awaits_promotion(loc(5, 0)));
        assert!(!state.awaits_promotion(loc(7, 0)));
        assert!(!state.awaits_promotion(loc(4, 4)));

        let mut tracker: Vec<(i32, i32, i32, i32, i32)> = Vec::new();
        assert_eq!(
            state.promote_pawn(loc(5, 0), PieceKind::Queen, &mut tracker, &4),
            Err(ChessErrors::InvalidPromotion(PieceKind::Pawn, PieceKind::Queen))
        );
        assert!(tracker.is_empty());
        assert_eq!(state.grid().pieces().len(), 3);
    }

    #[test]
    fn game_over_reports_mated_side() {
        let mut state = board("6k1/5ppp/8/8/8/8/8/R5K1", 8);
        assert_eq!(state.check_if_game_over(), SideColor::None);

        state.make_move(loc(0, 0), loc(7, 0)).unwrap();
        assert_eq!(state.calculate_check_state(), SideColor::Black);
        assert_eq!(state.check_if_game_over(), SideColor::Black);
    }

    #[test]
    fn can_move_answers_for_empty_cells() {
        let mut state = board(crate::game_state::chess_rules::STARTING_LAYOUT, 8);
        assert!(!state.can_move(loc(4, 4)));
        assert!(state.can_move(loc(0, 1)));
        assert!(!state.can_move(loc(0, 0)));
        assert_eq!(state.legal_moves(Color::White).len(), 20);
    }

    #[test]
    fn overlapping_setup_is_rejected() {
        let pieces = [
            PieceSpec::new(PieceKind::King, Color::White, 0, 0),
            PieceSpec::new(PieceKind::Rook, Color::White, 0, 0),
        ];
        assert!(matches!(
            BoardState::from_pieces(8, &pieces, 1.0),
            Err(ChessErrors::LocationOccupied(_))
        ));
    }
}
