//! Structured record of a completed move.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::game_state::board_config::MovePolicy;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::piece::PieceId;

/// One entry of a board's event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    pub piece: PieceId,
    /// Cached coordinate before the move; unset if the piece was never placed.
    pub from: Option<Coordinate>,
    pub to: Coordinate,
    pub policy: MovePolicy,
    pub at: DateTime<Utc>,
}

impl MoveEvent {
    pub fn new(
        piece: PieceId,
        from: Option<Coordinate>,
        to: Coordinate,
        policy: MovePolicy,
    ) -> Self {
        MoveEvent {
            piece,
            from,
            to,
            policy,
            at: Utc::now(),
        }
    }
}

impl fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stamp = self.at.format("%H:%M:%S%.3f");
        match self.from {
            Some(from) => write!(f, "[{stamp}] {} {from} -> {}", self.piece, self.to),
            None => write!(f, "[{stamp}] {} unset -> {}", self.piece, self.to),
        }
    }
}
