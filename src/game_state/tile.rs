//! Empty board squares.

use std::fmt;

use crate::game_state::chess_rules::{BOARD_SIZE, TILE_COUNT};
use crate::utils::render_board::{render_cell, TileShade};

/// Shade index per tile id. Flips after every id except at the end of a
/// row, so each row starts with the shade the previous row ended on.
pub const TILE_SHADE_TABLE: [u8; TILE_COUNT] = generate_toggle_table();

const fn generate_toggle_table() -> [u8; TILE_COUNT] {
    let mut table = [0u8; TILE_COUNT];
    let mut toggle = 0u8;
    let mut i = 0usize;

    while i < TILE_COUNT {
        table[i] = toggle;
        if (i + 1) % BOARD_SIZE != 0 {
            toggle = 1 - toggle;
        }
        i += 1;
    }

    table
}

/// One empty square. Immutable once the board template is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: u8,
    x: i8,
    y: i8,
    shade: TileShade,
}

impl Tile {
    /// `x` is the column and `y` the row. Ids come from the owning board,
    /// which hands them out in row-major order.
    pub fn new(id: u8, x: i8, y: i8) -> Self {
        let shade = match TILE_SHADE_TABLE[id as usize % TILE_COUNT] {
            0 => TileShade::Light,
            _ => TileShade::Dark,
        };
        Tile { id, x, y, shade }
    }

    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[inline]
    pub fn x(&self) -> i8 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i8 {
        self.y
    }

    #[inline]
    pub fn shade(&self) -> TileShade {
        self.shade
    }

    pub fn render(&self, ansi: bool) -> String {
        let coords = format!("{},{}", self.x, self.y);
        render_cell(&coords, self.shade.escape_code(), ansi)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}", self.id)
    }
}
