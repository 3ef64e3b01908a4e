//! Canonical board constants.
//!
//! Grid dimensions and the standard starting layout used by
//! `Board::reset_board`.

use crate::game_state::chess_types::PieceCategory;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 8;
/// Number of cells, and the length of the tile shade table.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row of the black back rank. Black pawns sit on the row below it.
pub const BLACK_BACK_ROW: usize = 0;
pub const BLACK_PAWN_ROW: usize = 1;
pub const WHITE_PAWN_ROW: usize = 6;
pub const WHITE_BACK_ROW: usize = 7;

/// Back rank by column, identical for both colors.
pub const BACK_RANK: [(PieceCategory, Option<u8>); BOARD_SIZE] = [
    (PieceCategory::Castle, Some(1)),
    (PieceCategory::Knight, Some(1)),
    (PieceCategory::Bishop, Some(1)),
    (PieceCategory::Queen, None),
    (PieceCategory::King, None),
    (PieceCategory::Bishop, Some(2)),
    (PieceCategory::Knight, Some(2)),
    (PieceCategory::Castle, Some(2)),
];

/// True when `v` indexes a row or column of the grid.
#[inline]
pub const fn on_board(v: i8) -> bool {
    v >= 0 && v < BOARD_SIZE as i8
}
