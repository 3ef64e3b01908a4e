//! Small value types shared by tiles, pieces and boards.

use std::fmt;

use crate::chess_errors::ChessErrors;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn prefix(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Reads the leading character of a piece identifier.
    pub fn from_prefix(c: char, identifier: &str) -> Result<Self, ChessErrors> {
        match c {
            'W' => Ok(Color::White),
            'B' => Ok(Color::Black),
            _ => Err(ChessErrors::InvalidColorPrefix(identifier.to_owned())),
        }
    }

    /// Row offset of one forward step. White starts on row 6 and moves up.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind. Color is carried separately on the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceCategory {
    Pawn,
    Castle,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceCategory {
    pub const ALL: [PieceCategory; 6] = [
        PieceCategory::Pawn,
        PieceCategory::Castle,
        PieceCategory::Knight,
        PieceCategory::Bishop,
        PieceCategory::Queen,
        PieceCategory::King,
    ];

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceCategory::Pawn => 'P',
            PieceCategory::Castle => 'C',
            PieceCategory::Knight => 'N',
            PieceCategory::Bishop => 'B',
            PieceCategory::Queen => 'Q',
            PieceCategory::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        PieceCategory::ALL.into_iter().find(|category| category.letter() == c)
    }

    /// Largest numeric suffix, or `None` for singletons.
    #[inline]
    pub const fn max_number(self) -> Option<u8> {
        match self {
            PieceCategory::Pawn => Some(8),
            PieceCategory::Castle | PieceCategory::Knight | PieceCategory::Bishop => Some(2),
            PieceCategory::Queen | PieceCategory::King => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceCategory::Pawn => 0,
            PieceCategory::Castle => 1,
            PieceCategory::Knight => 2,
            PieceCategory::Bishop => 3,
            PieceCategory::Queen => 4,
            PieceCategory::King => 5,
        }
    }
}

impl fmt::Display for PieceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceCategory::Pawn => "Pawn",
            PieceCategory::Castle => "Castle",
            PieceCategory::Knight => "Knight",
            PieceCategory::Bishop => "Bishop",
            PieceCategory::Queen => "Queen",
            PieceCategory::King => "King",
        };
        f.write_str(name)
    }
}

/// A coordinate pair. Pieces store (row, column); tiles store (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Coordinate { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
