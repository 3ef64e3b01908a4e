//! Per-board bookkeeping of issued piece identifiers.

use std::collections::HashSet;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceCategory;
use crate::game_state::piece::PieceId;

/// Identifiers already issued on one board, one set per category.
#[derive(Clone, Debug, Default)]
pub struct IdentifierRegistry {
    issued: [HashSet<PieceId>; 6],
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, id: &PieceId) -> Result<(), ChessErrors> {
        let category = id.category();
        if !self.issued[category.index()].insert(*id) {
            return Err(ChessErrors::DuplicateIdentifier {
                category,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn contains(&self, id: &PieceId) -> bool {
        self.issued[id.category().index()].contains(id)
    }

    pub fn issued(&self, category: PieceCategory) -> usize {
        self.issued[category.index()].len()
    }

    pub fn clear(&mut self) {
        for set in &mut self.issued {
            set.clear();
        }
    }
}
