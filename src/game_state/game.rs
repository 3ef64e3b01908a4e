//! A game: a list of board snapshots and the index of the active one.
//!
//! Construction creates exactly one board and selects it. Nothing appends
//! further snapshots yet; moves act on the current board in place.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::board_config::BoardConfig;

#[derive(Debug, Clone)]
pub struct Game {
    plays: Vec<Board>,
    play: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Game {
            plays: vec![Board::with_config(config)],
            play: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Board {
        &self.plays[self.play]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Board {
        &mut self.plays[self.play]
    }

    pub fn plays(&self) -> &[Board] {
        &self.plays
    }

    #[inline]
    pub fn play_index(&self) -> usize {
        self.play
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.current(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::utils::render_board::RESET;

    #[test]
    fn new_game_renders_sixty_four_cells_on_eight_lines() {
        let game = Game::new();
        assert_eq!(game.plays().len(), 1);
        assert_eq!(game.play_index(), 0);

        let text = game.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        for line in lines {
            assert_eq!(line.matches(RESET).count(), 8);
        }
    }

    #[test]
    fn two_games_in_one_process_both_reset() -> Result<(), ChessErrors> {
        let mut first = Game::with_config(BoardConfig::default().with_ansi_colors(false));
        let mut second = Game::new();
        first.current_mut().reset_board()?;
        second.current_mut().reset_board()?;
        assert_eq!(first.current().piece_count(), 32);
        assert_eq!(second.current().piece_count(), 32);
        assert!(first.to_string().starts_with(" BC1"));
        Ok(())
    }
}
