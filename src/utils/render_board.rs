//! Terminal-oriented ANSI board renderer.
//!
//! Every cell renders as its text right-aligned to four columns, wrapped in
//! one of the escape codes below and a reset. Rows are newline-terminated.
//! With colors disabled the same padded text is produced without escapes,
//! which keeps the model usable headlessly.

use crate::game_state::board::{Board, Cell};
use crate::game_state::chess_types::Color;

/// White foreground, black background.
pub const BLACK_PIECE: &str = "\x1b[97;40m";
/// Black foreground, white background.
pub const WHITE_PIECE: &str = "\x1b[30;47m";
/// Black foreground, light brown background.
pub const LIGHT_TILE: &str = "\x1b[30;103m";
/// Black foreground, dark brown background.
pub const DARK_TILE: &str = "\x1b[30;43m";
pub const RESET: &str = "\x1b[0m";

/// Width every cell is padded to.
pub const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShade {
    Light,
    Dark,
}

impl TileShade {
    #[inline]
    pub const fn escape_code(self) -> &'static str {
        match self {
            TileShade::Light => LIGHT_TILE,
            TileShade::Dark => DARK_TILE,
        }
    }
}

#[inline]
pub const fn piece_escape_code(color: Color) -> &'static str {
    match color {
        Color::White => WHITE_PIECE,
        Color::Black => BLACK_PIECE,
    }
}

/// Pad `text` to the cell width and optionally wrap it in `escape`.
pub fn render_cell(text: &str, escape: &str, ansi: bool) -> String {
    if ansi {
        format!("{escape}{text:>width$}{reset}", width = CELL_WIDTH, reset = RESET)
    } else {
        format!("{text:>width$}", width = CELL_WIDTH)
    }
}

/// Render the working grid row by row.
pub fn render_board(board: &Board) -> String {
    let ansi = board.config().ansi_colors;
    let mut out = String::new();

    for row in board.rows() {
        for cell in row {
            match cell {
                Cell::Empty(tile) => out.push_str(&tile.render(ansi)),
                Cell::Occupied(piece) => out.push_str(&piece.render(ansi)),
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board_config::BoardConfig;

    #[test]
    fn plain_cells_are_right_aligned() {
        assert_eq!(render_cell("WK", WHITE_PIECE, false), "  WK");
        assert_eq!(render_cell("WP3", WHITE_PIECE, true), "\x1b[30;47m WP3\x1b[0m");
    }

    #[test]
    fn reset_board_renders_pieces_and_tiles() -> Result<(), ChessErrors> {
        let mut board = Board::with_config(BoardConfig::default().with_ansi_colors(false));
        board.reset_board()?;
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " BC1 BN1 BB1  BQ  BK BB2 BN2 BC2");
        assert_eq!(lines[1], " BP1 BP2 BP3 BP4 BP5 BP6 BP7 BP8");
        assert_eq!(lines[2], " 0,2 1,2 2,2 3,2 4,2 5,2 6,2 7,2");
        assert_eq!(lines[7], " WC1 WN1 WB1  WQ  WK WB2 WN2 WC2");
        Ok(())
    }

    #[test]
    fn ansi_board_wraps_every_cell() {
        let board = Board::new();
        let text = render_board(&board);
        assert_eq!(text.matches(RESET).count(), 64);
        assert!(text.starts_with(LIGHT_TILE));
    }
}
