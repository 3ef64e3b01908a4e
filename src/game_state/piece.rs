//! Pieces: a tagged identifier plus cached position and history.
//!
//! `PieceId` carries color, category and the optional per-color number and
//! is validated by `PieceId::new`, a pure function of those three values.
//! Identifier strings (`WP3`, `BK`, ...) go through `PieceId::parse`, which
//! checks the color prefix first, then the type letter, then the suffix.
//!
//! A `Piece` knows nothing about the grid. Its position is a cache that the
//! owning board refreshes through `record_position` after every structural
//! change; `move_to` only validates the target row and updates that cache.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::on_board;
use crate::game_state::chess_types::{Color, Coordinate, PieceCategory};
use crate::utils::render_board::{piece_escape_code, render_cell};

/// Identity of a piece, e.g. `WP3` or `BK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    color: Color,
    category: PieceCategory,
    number: Option<u8>,
}

impl PieceId {
    /// Validates the number against the category's range. Singletons
    /// (queen, king) take `None`.
    pub fn new(
        color: Color,
        category: PieceCategory,
        number: Option<u8>,
    ) -> Result<Self, ChessErrors> {
        match (category.max_number(), number) {
            (Some(max), Some(n)) if (1..=max).contains(&n) => {}
            (Some(_), number) => {
                return Err(ChessErrors::SuffixOutOfRange {
                    category,
                    suffix: number.map(|n| n.to_string()).unwrap_or_default(),
                })
            }
            (None, Some(_)) => return Err(ChessErrors::UnexpectedSuffix(category)),
            (None, None) => {}
        }
        Ok(PieceId {
            color,
            category,
            number,
        })
    }

    pub fn parse(identifier: &str) -> Result<Self, ChessErrors> {
        let mut chars = identifier.chars();
        let prefix = chars
            .next()
            .ok_or_else(|| ChessErrors::InvalidColorPrefix(identifier.to_owned()))?;
        let color = Color::from_prefix(prefix, identifier)?;

        let category = chars
            .next()
            .and_then(PieceCategory::from_letter)
            .ok_or_else(|| ChessErrors::UnknownCategory(identifier.to_owned()))?;

        let suffix = chars.as_str();
        let number = match (category.max_number(), suffix.is_empty()) {
            (None, true) => None,
            (None, false) => return Err(ChessErrors::UnexpectedSuffix(category)),
            (Some(_), _) => {
                let n = suffix
                    .parse::<u8>()
                    .ok()
                    .filter(|_| is_canonical_number(suffix))
                    .ok_or_else(|| ChessErrors::SuffixOutOfRange {
                        category,
                        suffix: suffix.to_owned(),
                    })?;
                Some(n)
            }
        };

        PieceId::new(color, category, number)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn category(&self) -> PieceCategory {
        self.category
    }

    #[inline]
    pub fn number(&self) -> Option<u8> {
        self.number
    }
}

/// Plain decimal digits without a leading zero, so each number has one spelling.
fn is_canonical_number(suffix: &str) -> bool {
    !suffix.starts_with('0') && suffix.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for PieceId {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceId::parse(s)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.prefix(), self.category.letter())?;
        if let Some(n) = self.number {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// A piece with its cached board coordinate (row, column) and every
/// coordinate it has held, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    position: Option<Coordinate>,
    history: Vec<Coordinate>,
}

impl Piece {
    pub fn new(id: PieceId) -> Self {
        Piece {
            id,
            position: None,
            history: Vec::new(),
        }
    }

    pub fn from_identifier(identifier: &str) -> Result<Self, ChessErrors> {
        Ok(Piece::new(PieceId::parse(identifier)?))
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.id.color
    }

    #[inline]
    pub fn category(&self) -> PieceCategory {
        self.id.category
    }

    #[inline]
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    #[inline]
    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    /// Called by the board whenever it synchronizes cached coordinates.
    pub fn record_position(&mut self, x: i8, y: i8) {
        let at = Coordinate::new(x, y);
        self.position = Some(at);
        self.history.push(at);
    }

    /// Only `y` is bounds-checked here; the board checks `x` when it
    /// relocates the piece.
    pub fn move_to(&mut self, x: i8, y: i8) -> Result<(), ChessErrors> {
        if !on_board(y) {
            return Err(ChessErrors::OutOfBounds { x, y });
        }
        self.record_position(x, y);
        Ok(())
    }

    /// Square `spaces` rows ahead of a pawn, in its color's direction.
    pub fn forward_target(&self, spaces: u8) -> Result<Coordinate, ChessErrors> {
        if self.category() != PieceCategory::Pawn {
            return Err(ChessErrors::NotAPawn(self.id.to_string()));
        }
        if !(1..=2).contains(&spaces) {
            return Err(ChessErrors::InvalidAdvance(spaces));
        }
        let from = self
            .position
            .ok_or_else(|| ChessErrors::PositionUnset(self.id.to_string()))?;
        let x = from.x + self.color().forward() * spaces as i8;
        if !on_board(x) || !on_board(from.y) {
            return Err(ChessErrors::OutOfBounds { x, y: from.y });
        }
        Ok(Coordinate::new(x, from.y))
    }

    pub fn render(&self, ansi: bool) -> String {
        render_cell(&self.id.to_string(), piece_escape_code(self.color()), ansi)
    }
}

/// Identifier, current position and every recorded position,
/// e.g. `WP1 (6,0) [(6,0), (4,0)]`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.id)?;
        match self.position {
            Some(at) => write!(f, "{at}")?,
            None => f.write_str("unset")?,
        }
        f.write_str(" [")?;
        for (i, at) in self.history.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{at}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_display() -> Result<(), ChessErrors> {
        for text in ["WP1", "BP8", "WC2", "BN1", "WB2", "WQ", "BK"] {
            assert_eq!(PieceId::parse(text)?.to_string(), text);
        }
        let id: PieceId = "BB2".parse()?;
        assert_eq!(id.color(), Color::Black);
        assert_eq!(id.category(), PieceCategory::Bishop);
        assert_eq!(id.number(), Some(2));
        Ok(())
    }

    #[test]
    fn identifier_must_start_with_a_color() {
        for text in ["XP1", "wP1", "P1", ""] {
            assert_eq!(
                Piece::from_identifier(text),
                Err(ChessErrors::InvalidColorPrefix(text.to_owned())),
                "{text}"
            );
        }
    }

    #[test]
    fn unknown_type_letter_is_rejected() {
        assert!(matches!(PieceId::parse("WR1"), Err(ChessErrors::UnknownCategory(_))));
        assert!(matches!(PieceId::parse("W"), Err(ChessErrors::UnknownCategory(_))));
    }

    #[test]
    fn numbered_suffix_must_be_in_range() {
        for text in [
            "WB0", "WB3", "BN9", "BC12", "WP9", "WP0", "WP", "WPx", "WP+1", "WP01", "BB002",
        ] {
            assert!(
                matches!(PieceId::parse(text), Err(ChessErrors::SuffixOutOfRange { .. })),
                "{text}"
            );
        }
        assert!(PieceId::parse("WP8").is_ok());
        assert!(PieceId::new(Color::White, PieceCategory::Bishop, Some(3)).is_err());
        assert!(PieceId::new(Color::White, PieceCategory::Knight, None).is_err());
    }

    #[test]
    fn singletons_take_no_suffix() {
        assert_eq!(
            PieceId::parse("WQ1"),
            Err(ChessErrors::UnexpectedSuffix(PieceCategory::Queen))
        );
        assert_eq!(
            PieceId::new(Color::Black, PieceCategory::King, Some(1)),
            Err(ChessErrors::UnexpectedSuffix(PieceCategory::King))
        );
    }

    #[test]
    fn new_piece_has_no_position() -> Result<(), ChessErrors> {
        let piece = Piece::from_identifier("BQ")?;
        assert_eq!(piece.position(), None);
        assert!(piece.history().is_empty());
        Ok(())
    }

    #[test]
    fn move_checks_only_the_second_coordinate() -> Result<(), ChessErrors> {
        let mut piece = Piece::from_identifier("WN1")?;
        piece.record_position(2, 5);

        assert_eq!(piece.move_to(2, -1), Err(ChessErrors::OutOfBounds { x: 2, y: -1 }));
        assert_eq!(piece.move_to(2, 8), Err(ChessErrors::OutOfBounds { x: 2, y: 8 }));
        assert_eq!(piece.history(), &[Coordinate::new(2, 5)]);

        piece.move_to(2, 3)?;
        assert_eq!(piece.position(), Some(Coordinate::new(2, 3)));
        assert_eq!(piece.history(), &[Coordinate::new(2, 5), Coordinate::new(2, 3)]);

        piece.move_to(11, 0)?;
        assert_eq!(piece.position(), Some(Coordinate::new(11, 0)));
        Ok(())
    }

    #[test]
    fn pawn_forward_target_follows_color() -> Result<(), ChessErrors> {
        let mut white = Piece::from_identifier("WP4")?;
        assert_eq!(white.forward_target(1), Err(ChessErrors::PositionUnset("WP4".to_owned())));
        white.record_position(6, 3);
        assert_eq!(white.forward_target(2)?, Coordinate::new(4, 3));
        assert_eq!(white.forward_target(3), Err(ChessErrors::InvalidAdvance(3)));

        let mut black = Piece::from_identifier("BP4")?;
        black.record_position(7, 3);
        assert_eq!(black.forward_target(1), Err(ChessErrors::OutOfBounds { x: 8, y: 3 }));

        let mut knight = Piece::from_identifier("BN2")?;
        knight.record_position(0, 6);
        assert_eq!(knight.forward_target(1), Err(ChessErrors::NotAPawn("BN2".to_owned())));
        Ok(())
    }

    #[test]
    fn display_summarises_position_and_history() -> Result<(), ChessErrors> {
        let mut piece = Piece::from_identifier("WP1")?;
        assert_eq!(piece.to_string(), "WP1 unset []");
        piece.record_position(6, 0);
        piece.move_to(4, 0)?;
        assert_eq!(piece.to_string(), "WP1 (4,0) [(6,0), (4,0)]");
        Ok(())
    }

    #[test]
    fn render_pads_identifier() -> Result<(), ChessErrors> {
        assert_eq!(Piece::from_identifier("BK")?.render(false), "  BK");
        assert_eq!(Piece::from_identifier("WP1")?.render(true), "\x1b[30;47m WP1\x1b[0m");
        Ok(())
    }
}
