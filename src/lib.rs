//! Crate root module declarations for the board-state chess rules engine.
//!
//! Exposes the board grid, per-piece movement rules, check and game-end
//! calculation, the live board and the replay board with its legacy move
//! encoding, so the engine can be embedded behind any view or move tracker.

pub mod board_location;
pub mod chess_errors;
pub mod piece_record;

pub mod game_state {
    pub mod board_grid;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod collaborators;
    pub mod engine_config;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod direction_lookup;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod check_state_calculator;
    pub mod game_end_calculator;
    pub mod legal_move_generator;
}

pub mod replay {
    pub mod board_state_replay;
    pub mod replay_ledger;
    pub mod replay_move;
}

pub mod utils {
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod render_board;
}
