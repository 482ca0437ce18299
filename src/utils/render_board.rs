//! Terminal-oriented Unicode board renderer.
//!
//! Used by tests and log output to show a grid of any size. Row `N-1` is
//! printed first so White's home rows end up at the bottom.

use crate::board_location::BoardLocation;
use crate::game_state::board_grid::BoardGrid;
use crate::game_state::chess_types::{Color, PieceKind};

/// Render the grid to a Unicode string for terminal output.
///
/// Columns are labelled `a`, `b`, ... and rows `1..=N`. Boards wider than 26
/// columns label columns by number instead.
pub fn render_board(grid: &BoardGrid) -> String {
    let size = grid.size();
    let label_width = size.to_string().len();
    let header = column_header(size, label_width);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in (0..size).rev() {
        let label = format!("{:>label_width$}", row + 1);
        out.push_str(&label);
        out.push(' ');

        for column in 0..size {
            let location = BoardLocation::new(row as i32, column as i32);
            match grid.piece_at(location) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if column + 1 < size {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push_str(&label);
        out.push('\n');
    }

    out.push_str(&header);
    out
}

fn column_header(size: usize, label_width: usize) -> String {
    let labels: Vec<String> = (0..size)
        .map(|column| {
            if size <= 26 {
                char::from(b'a' + column as u8).to_string()
            } else {
                (column % 10).to_string()
            }
        })
        .collect();
    format!("{} {}", " ".repeat(label_width), labels.join(" "))
}

pub fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
