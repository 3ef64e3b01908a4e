//! Board behaviour switches.

/// What `Board::move_piece` does with the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Relocate the piece into the destination cell, then synchronize.
    #[default]
    RelocateInGrid,
    /// Update only the piece's cached coordinate. The following
    /// synchronization restores it from the unchanged grid cell.
    CachedCoordinateOnly,
}

/// Configuration for a board. Default: relocating moves, ANSI colors on,
/// move events recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub move_policy: MovePolicy,
    /// Wrap rendered cells in escape codes.
    pub ansi_colors: bool,
    /// Keep a `MoveEvent` per successful move.
    pub record_events: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            move_policy: MovePolicy::default(),
            ansi_colors: true,
            record_events: true,
        }
    }
}

impl BoardConfig {
    pub fn with_move_policy(mut self, move_policy: MovePolicy) -> Self {
        self.move_policy = move_policy;
        self
    }

    pub fn with_ansi_colors(mut self, ansi_colors: bool) -> Self {
        self.ansi_colors = ansi_colors;
        self
    }

    pub fn with_record_events(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let config = BoardConfig::default()
            .with_move_policy(MovePolicy::CachedCoordinateOnly)
            .with_ansi_colors(false)
            .with_record_events(false);
        assert_eq!(config.move_policy, MovePolicy::CachedCoordinateOnly);
        assert!(!config.ansi_colors);
        assert!(!config.record_events);
        assert_eq!(BoardConfig::default().move_policy, MovePolicy::RelocateInGrid);
    }
}
