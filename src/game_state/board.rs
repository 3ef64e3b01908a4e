//! The 8x8 grid of tiles and pieces.
//!
//! A `Board` keeps two grids. `empty_board` is the template of 64 tiles
//! built once at construction; `board` is the working grid, copied from the
//! template and then overwritten with pieces. Every cell holds exactly one
//! `Cell`, either the template tile or a piece, so a cell never holds two
//! pieces.
//!
//! Pieces cache their (row, column). The board refreshes that cache with
//! `synchronize_positions` after every placement, reset and move, so cached
//! coordinates always agree with the grid once a board operation returns.
//!
//! Identifier uniqueness is tracked by an `IdentifierRegistry` owned by the
//! board. `reset_board` clears it along with the grid.

use std::fmt;

use tracing::{debug, info, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::board_config::{BoardConfig, MovePolicy};
use crate::game_state::chess_rules::{
    on_board, BACK_RANK, BLACK_BACK_ROW, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_BACK_ROW,
    WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::{Color, Coordinate, PieceCategory};
use crate::game_state::identifier_registry::IdentifierRegistry;
use crate::game_state::move_event::MoveEvent;
use crate::game_state::piece::{Piece, PieceId};
use crate::game_state::tile::Tile;
use crate::utils::render_board::render_board;

type Grid<T> = [[T; BOARD_SIZE]; BOARD_SIZE];

/// Content of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty(Tile),
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty(_) => None,
        }
    }

    #[inline]
    pub fn piece_mut(&mut self) -> Option<&mut Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty(_) => None,
        }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    empty_board: Grid<Tile>,
    board: Grid<Cell>,
    registry: IdentifierRegistry,
    config: BoardConfig,
    events: Vec<MoveEvent>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        let empty_board: Grid<Tile> = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                Tile::new((row * BOARD_SIZE + col) as u8, col as i8, row as i8)
            })
        });
        let board = copy_template(&empty_board);
        Board {
            empty_board,
            board,
            registry: IdentifierRegistry::new(),
            config,
            events: Vec::new(),
        }
    }

    /// Clear the grid and place all 32 pieces in the starting layout.
    pub fn reset_board(&mut self) -> Result<(), ChessErrors> {
        info!("resetting board to the starting layout");
        self.registry.clear();
        self.events.clear();
        self.board = copy_template(&self.empty_board);

        for col in 0..BOARD_SIZE {
            let number = Some(col as u8 + 1);
            let black = PieceId::new(Color::Black, PieceCategory::Pawn, number)?;
            let white = PieceId::new(Color::White, PieceCategory::Pawn, number)?;
            self.install(black, BLACK_PAWN_ROW, col)?;
            self.install(white, WHITE_PAWN_ROW, col)?;
        }
        for (col, &(category, number)) in BACK_RANK.iter().enumerate() {
            self.install(PieceId::new(Color::Black, category, number)?, BLACK_BACK_ROW, col)?;
            self.install(PieceId::new(Color::White, category, number)?, WHITE_BACK_ROW, col)?;
        }

        self.synchronize_positions();
        Ok(())
    }

    /// Put a new piece into an empty cell at (row `x`, column `y`).
    pub fn place_piece(&mut self, identifier: &str, x: i8, y: i8) -> Result<(), ChessErrors> {
        let id = PieceId::parse(identifier)?;
        if !on_board(x) || !on_board(y) {
            return Err(ChessErrors::OutOfBounds { x, y });
        }
        if self.board[x as usize][y as usize].is_occupied() {
            return Err(ChessErrors::DestinationOccupied { x, y });
        }
        self.install(id, x as usize, y as usize)?;
        debug!(piece = %id, x, y, "placed piece");
        self.synchronize_positions();
        Ok(())
    }

    fn install(&mut self, id: PieceId, row: usize, col: usize) -> Result<(), ChessErrors> {
        self.registry.issue(&id)?;
        self.board[row][col] = Cell::Occupied(Piece::new(id));
        Ok(())
    }

    /// Tell every piece which (row, column) it occupies.
    pub fn synchronize_positions(&mut self) {
        let mut count = 0usize;
        for (row, cells) in self.board.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if let Some(piece) = cell.piece_mut() {
                    piece.record_position(row as i8, col as i8);
                    count += 1;
                }
            }
        }
        trace!(pieces = count, "synchronized piece positions");
    }

    fn locate(&self, identifier: &str) -> Result<(usize, usize), ChessErrors> {
        let not_found = || ChessErrors::PieceNotFound(identifier.to_owned());
        let id = PieceId::parse(identifier).map_err(|_| not_found())?;
        for (row, cells) in self.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.piece().is_some_and(|piece| piece.id() == id) {
                    return Ok((row, col));
                }
            }
        }
        Err(not_found())
    }

    pub fn get_piece(&self, identifier: &str) -> Result<&Piece, ChessErrors> {
        let (row, col) = self.locate(identifier)?;
        self.board[row][col]
            .piece()
            .ok_or_else(|| ChessErrors::PieceNotFound(identifier.to_owned()))
    }

    pub fn get_piece_mut(&mut self, identifier: &str) -> Result<&mut Piece, ChessErrors> {
        let (row, col) = self.locate(identifier)?;
        self.board[row][col]
            .piece_mut()
            .ok_or_else(|| ChessErrors::PieceNotFound(identifier.to_owned()))
    }

    /// Move a piece to (row `x`, column `y`) according to the configured
    /// `MovePolicy`, then synchronize all cached positions.
    pub fn move_piece(&mut self, identifier: &str, x: i8, y: i8) -> Result<(), ChessErrors> {
        let (row, col) = self.locate(identifier)?;
        let policy = self.config.move_policy;
        if policy == MovePolicy::RelocateInGrid {
            self.check_destination(x, y, (row, col))?;
        }

        let piece = self.board[row][col]
            .piece_mut()
            .ok_or_else(|| ChessErrors::PieceNotFound(identifier.to_owned()))?;
        let from = piece.position();
        piece.move_to(x, y)?;
        let id = piece.id();
        let to = Coordinate::new(x, y);
        debug!(piece = %id, ?from, %to, ?policy, "moving piece");

        if policy == MovePolicy::RelocateInGrid && (row, col) != (x as usize, y as usize) {
            let vacated = Cell::Empty(self.empty_board[row][col].clone());
            let moving = std::mem::replace(&mut self.board[row][col], vacated);
            self.board[x as usize][y as usize] = moving;
        }
        if self.config.record_events {
            self.events.push(MoveEvent::new(id, from, to, policy));
        }

        self.synchronize_positions();
        Ok(())
    }

    fn check_destination(&self, x: i8, y: i8, origin: (usize, usize)) -> Result<(), ChessErrors> {
        if !on_board(x) || !on_board(y) {
            return Err(ChessErrors::OutOfBounds { x, y });
        }
        let target = (x as usize, y as usize);
        if target != origin && self.board[target.0][target.1].is_occupied() {
            return Err(ChessErrors::DestinationOccupied { x, y });
        }
        Ok(())
    }

    /// Advance a pawn one or two squares; every square on the way must be empty.
    pub fn advance_pawn(&mut self, identifier: &str, spaces: u8) -> Result<(), ChessErrors> {
        let piece = self.get_piece(identifier)?;
        let target = piece.forward_target(spaces)?;
        let step = piece.color().forward();
        let from = piece
            .position()
            .ok_or_else(|| ChessErrors::PositionUnset(identifier.to_owned()))?;

        for k in 1..=spaces as i8 {
            let x = from.x + step * k;
            if self.board[x as usize][from.y as usize].is_occupied() {
                return Err(ChessErrors::DestinationOccupied { x, y: from.y });
            }
        }
        self.move_piece(identifier, target.x, target.y)
    }

    /// Cell at (row `x`, column `y`).
    pub fn cell(&self, x: i8, y: i8) -> Option<&Cell> {
        if on_board(x) && on_board(y) {
            Some(&self.board[x as usize][y as usize])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.board.iter()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.iter().flatten().filter_map(Cell::piece)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    pub fn events(&self) -> &[MoveEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn render(&self) -> String {
        render_board(self)
    }
}

fn copy_template(template: &Grid<Tile>) -> Grid<Cell> {
    std::array::from_fn(|row| std::array::from_fn(|col| Cell::Empty(template[row][col].clone())))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
