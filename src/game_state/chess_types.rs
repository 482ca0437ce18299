//! Shared enums for piece ownership, piece kinds and check results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner of a piece. A piece is always White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Result of a check or game-end computation.
///
/// `None` and `Both` never describe a piece owner; they only show up as
/// answers to "which side is in check" or "which side has no move left".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideColor {
    None,
    White,
    Black,
    Both,
}

impl SideColor {
    /// Folds two per-side flags into a single result.
    #[inline]
    pub const fn from_flags(white: bool, black: bool) -> Self {
        match (white, black) {
            (false, false) => SideColor::None,
            (true, false) => SideColor::White,
            (false, true) => SideColor::Black,
            (true, true) => SideColor::Both,
        }
    }

    /// True when `color` is part of this result.
    #[inline]
    pub const fn includes(self, color: Color) -> bool {
        matches!(
            (self, color),
            (SideColor::Both, _) | (SideColor::White, Color::White) | (SideColor::Black, Color::Black)
        )
    }
}

impl From<Color> for SideColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => SideColor::White,
            Color::Black => SideColor::Black,
        }
    }
}

/// Piece kind (color is stored separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may be promoted to.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_color_folds_flags() {
        assert_eq!(SideColor::from_flags(false, false), SideColor::None);
        assert_eq!(SideColor::from_flags(true, false), SideColor::White);
        assert_eq!(SideColor::from_flags(false, true), SideColor::Black);
        assert_eq!(SideColor::from_flags(true, true), SideColor::Both);
    }

    #[test]
    fn both_includes_either_color() {
        assert!(SideColor::Both.includes(Color::White));
        assert!(SideColor::Both.includes(Color::Black));
        assert!(!SideColor::None.includes(Color::White));
        assert!(!SideColor::White.includes(Color::Black));
    }

    #[test]
    fn only_minor_and_major_pieces_are_promotion_targets() {
        assert!(PieceKind::Queen.is_promotion_target());
        assert!(PieceKind::Knight.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
        assert!(!PieceKind::King.is_promotion_target());
    }
}
