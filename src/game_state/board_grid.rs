//! N×N occupancy grid plus the arena of pieces that live on it.
//!
//! `BoardGrid` is shared by the live board and the replay board. Cells hold
//! `PieceId`s into `pieces`; a piece's stored location always equals the cell
//! that references it, and only `set` / `clear` touch cells.

use log::trace;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::MAX_BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceKind, SideColor};
use crate::move_generation::check_state_calculator::calculate_check;
use crate::piece_record::{PieceId, PieceRecord};

/// Accepts `1..=MAX_BOARD_SIZE`. Anything else is `InvalidBoardSize`.
pub fn validate_board_size(size: usize) -> Result<(), ChessErrors> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(ChessErrors::InvalidBoardSize(size));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    size: usize,
    cells: Vec<Option<PieceId>>,
    pieces: Vec<PieceRecord>,
}

impl BoardGrid {
    /// Empty `size`×`size` grid. A size outside `1..=MAX_BOARD_SIZE` is a
    /// configuration error.
    pub fn new(size: usize) -> Result<Self, ChessErrors> {
        validate_board_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
            pieces: Vec::new(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_in_borders(&self, location: BoardLocation) -> bool {
        location.is_within(self.size)
    }

    #[inline]
    fn cell_index(&self, location: BoardLocation) -> usize {
        location.row as usize * self.size + location.column as usize
    }

    /// Id of the piece at `location`, `None` when empty or off the board.
    #[inline]
    pub fn field(&self, location: BoardLocation) -> Option<PieceId> {
        if !self.is_in_borders(location) {
            return None;
        }
        self.cells[self.cell_index(location)]
    }

    /// Piece at `location`. Off-board locations are an error here.
    pub fn get(&self, location: BoardLocation) -> Result<Option<&PieceRecord>, ChessErrors> {
        if !self.is_in_borders(location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        Ok(self.cells[self.cell_index(location)].map(|id| &self.pieces[id]))
    }

    /// Piece at `location`, treating empty and off-board cells alike.
    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<&PieceRecord> {
        self.field(location).map(|id| &self.pieces[id])
    }

    pub fn piece(&self, id: PieceId) -> Result<&PieceRecord, ChessErrors> {
        self.pieces.get(id).ok_or(ChessErrors::UnknownPiece(id))
    }

    pub fn pieces(&self) -> &[PieceRecord] {
        &self.pieces
    }

    /// Active pieces of one color, in arena order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.active && p.color == color)
    }

    /// Registers a new active piece and places it on the grid.
    pub fn spawn_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        location: BoardLocation,
    ) -> Result<PieceId, ChessErrors> {
        if !self.is_in_borders(location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        let id = self.pieces.len();
        self.pieces.push(PieceRecord::new(id, kind, color, location));
        let idx = self.cell_index(location);
        self.cells[idx] = Some(id);
        Ok(id)
    }

    /// Moves `piece` to `location`, vacating the cell it previously held.
    ///
    /// The old cell is only cleared while it still references this piece, so
    /// a piece that was replaced in place (promotion) cannot wipe its
    /// replacement.
    pub fn set(&mut self, piece: PieceId, location: BoardLocation) -> Result<(), ChessErrors> {
        if !self.is_in_borders(location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        let previous = self.piece(piece)?.location;
        if self.field(previous) == Some(piece) {
            let old_idx = self.cell_index(previous);
            self.cells[old_idx] = None;
        }
        let idx = self.cell_index(location);
        self.cells[idx] = Some(piece);
        self.pieces[piece].location = location;
        Ok(())
    }

    /// Empties a cell. The piece that stood there keeps its stored state.
    pub fn clear(&mut self, location: BoardLocation) -> Result<(), ChessErrors> {
        if !self.is_in_borders(location) {
            return Err(ChessErrors::OutOfBounds(location));
        }
        let idx = self.cell_index(location);
        self.cells[idx] = None;
        Ok(())
    }

    pub fn set_active(&mut self, piece: PieceId, active: bool) -> Result<(), ChessErrors> {
        self.pieces
            .get_mut(piece)
            .ok_or(ChessErrors::UnknownPiece(piece))?
            .active = active;
        Ok(())
    }

    /// Drops every piece registered after the first `len`. Cells that still
    /// reference a dropped piece are emptied.
    pub(crate) fn truncate_pieces(&mut self, len: usize) {
        if len >= self.pieces.len() {
            return;
        }
        self.pieces.truncate(len);
        for cell in self.cells.iter_mut() {
            if cell.is_some_and(|id| id >= len) {
                *cell = None;
            }
        }
    }

    /// Puts the first `keep` pieces back on their starting cells, reactivates
    /// them and discards every piece registered after them. Returns the ids
    /// that were discarded.
    pub fn restore_starting_positions(&mut self, keep: usize) -> Vec<PieceId> {
        let dropped: Vec<PieceId> = (keep..self.pieces.len()).collect();
        self.pieces.truncate(keep);
        for piece in self.pieces.iter_mut() {
            piece.location = piece.starting_location;
            piece.active = true;
        }
        self.rebuild_cells();
        dropped
    }

    /// Empties every cell and re-places all active pieces at their stored
    /// locations.
    pub fn rebuild_cells(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        for idx in 0..self.pieces.len() {
            let piece = self.pieces[idx];
            if piece.active && self.is_in_borders(piece.location) {
                let cell = self.cell_index(piece.location);
                self.cells[cell] = Some(piece.id);
            }
        }
    }

    /// Which side(s) are in check right now.
    pub fn calculate_check_state(&self) -> SideColor {
        calculate_check(self)
    }

    /// Check state that moving the piece at `from` to `to` would produce.
    ///
    /// The move is applied, scanned and fully reverted: afterwards both cells
    /// hold exactly what they held before, including a piece that stood on
    /// `to`. Off-board endpoints and an empty `from` answer `None` without
    /// touching the grid.
    pub fn simulate_check_state(&mut self, from: BoardLocation, to: BoardLocation) -> SideColor {
        if !self.is_in_borders(to) || !self.is_in_borders(from) {
            return SideColor::None;
        }
        let Some(moving) = self.field(from) else {
            return SideColor::None;
        };
        if from == to {
            return calculate_check(self);
        }
        let target = self.field(to);

        let from_idx = self.cell_index(from);
        let to_idx = self.cell_index(to);

        self.cells[to_idx] = Some(moving);
        self.cells[from_idx] = None;
        self.pieces[moving].location = to;

        let check_state = calculate_check(self);

        self.cells[from_idx] = Some(moving);
        self.cells[to_idx] = target;
        self.pieces[moving].location = from;

        trace!("simulated {from} -> {to}: {check_state:?}");
        check_state
    }
}
