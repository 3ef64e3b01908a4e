//! Errors used throughout the board model.
//!
//! `ChessErrors` is the single error type returned by identifier parsing,
//! registry bookkeeping, board placement and piece movement. Every failure
//! is a synchronous validation error raised where the violation happens and
//! handed back to the caller; nothing is retried or recovered internally.
//!
//! Usage guidelines:
//! - Functions return `Result<..., ChessErrors>` and propagate with `?`.
//! - Identifier variants (`InvalidColorPrefix`, `UnknownCategory`,
//!   `SuffixOutOfRange`, `UnexpectedSuffix`, `DuplicateIdentifier`) come from
//!   piece construction and surface transitively from `Board::reset_board`.
//! - Movement variants (`OutOfBounds`, `DestinationOccupied`, `NotAPawn`,
//!   `InvalidAdvance`, `PositionUnset`) come from `Piece` and `Board` moves.

use crate::game_state::chess_types::PieceCategory;

/// Unified error type for the board model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// The identifier does not start with `W` or `B`.
    ///
    /// Payload: the offending identifier text.
    #[error("piece identifier {0:?} must start with \"W\" or \"B\"")]
    InvalidColorPrefix(String),

    /// The character after the color prefix is not a known type letter.
    ///
    /// Payload: the offending identifier text.
    #[error("piece identifier {0:?} has no recognised type letter")]
    UnknownCategory(String),

    /// A numbered category got a suffix outside its valid range, or no
    /// usable suffix at all.
    #[error("{category} suffix {suffix:?} is outside the valid range")]
    SuffixOutOfRange {
        category: PieceCategory,
        suffix: String,
    },

    /// A singleton category (queen, king) was given a numeric suffix.
    #[error("{0} identifiers carry no numeric suffix")]
    UnexpectedSuffix(PieceCategory),

    /// The identifier was already issued for its category on this board.
    #[error("{category} with ID {id} already exists")]
    DuplicateIdentifier { category: PieceCategory, id: String },

    /// A coordinate outside `0..=7`.
    #[error("cannot move beyond the board: ({x},{y})")]
    OutOfBounds { x: i8, y: i8 },

    /// No occupied cell holds a piece with this identifier.
    #[error("no piece with id {0}")]
    PieceNotFound(String),

    /// The destination cell (or a cell on a pawn's path) already holds a piece.
    #[error("cannot move to an occupied position: ({x},{y})")]
    DestinationOccupied { x: i8, y: i8 },

    /// A pawn-only operation was requested for another piece.
    ///
    /// Payload: the identifier of the piece.
    #[error("{0} is not a pawn")]
    NotAPawn(String),

    /// Pawns advance one or two squares.
    #[error("a pawn cannot advance {0} squares")]
    InvalidAdvance(u8),

    /// The piece has never been placed on a board.
    #[error("{0} has no position yet")]
    PositionUnset(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ChessErrors::DuplicateIdentifier {
            category: PieceCategory::Pawn,
            id: "WP3".to_owned(),
        };
        assert_eq!(err.to_string(), "Pawn with ID WP3 already exists");

        let err = ChessErrors::OutOfBounds { x: 2, y: 8 };
        assert_eq!(err.to_string(), "cannot move beyond the board: (2,8)");

        let err = ChessErrors::PieceNotFound("WQ2".to_owned());
        assert_eq!(err.to_string(), "no piece with id WQ2");
    }
}
