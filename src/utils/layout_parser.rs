//! Placement-string parser.
//!
//! Reads the board part of a FEN-like string for an N×N board. Segments are
//! separated by `/` and list rows from `N-1` down to `0`; inside a segment,
//! columns run from `0` upward. Uppercase letters are White, lowercase Black,
//! and a run of digits skips that many empty cells (so `12` is one run of
//! twelve on large boards).

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::board_grid::validate_board_size;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::piece_record::PieceSpec;

pub fn parse_layout(layout: &str, board_size: usize) -> Result<Vec<PieceSpec>, ChessErrors> {
    validate_board_size(board_size)?;

    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != board_size {
        return Err(ChessErrors::InvalidLayout(format!(
            "layout has {} rows, board needs {board_size}",
            rows.len()
        )));
    }

    let mut pieces = Vec::new();

    for (segment_idx, row_str) in rows.iter().enumerate() {
        let row = (board_size - 1 - segment_idx) as i32;
        let mut column = 0usize;
        let mut empty_run = 0usize;

        for ch in row_str.chars() {
            if let Some(digit) = ch.to_digit(10) {
                empty_run = empty_run
                    .checked_mul(10)
                    .and_then(|run| run.checked_add(digit as usize))
                    .filter(|run| column + run <= board_size)
                    .ok_or_else(|| {
                        ChessErrors::InvalidLayout(format!("row {row} has too many columns"))
                    })?;
                continue;
            }

            column += empty_run;
            empty_run = 0;

            let (color, kind) = piece_from_layout_char(ch).ok_or_else(|| {
                ChessErrors::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;

            if column >= board_size {
                return Err(ChessErrors::InvalidLayout(format!(
                    "row {row} has too many columns"
                )));
            }

            pieces.push(PieceSpec {
                kind,
                color,
                location: BoardLocation::new(row, column as i32),
            });
            column += 1;
        }

        column += empty_run;
        if column != board_size {
            return Err(ChessErrors::InvalidLayout(format!(
                "row {row} covers {column} columns, expected {board_size}"
            )));
        }
    }

    Ok(pieces)
}

pub fn piece_from_layout_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

pub fn piece_to_layout_char(color: Color, kind: PieceKind) -> char {
    let ch = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
