//! Crate root module declarations for the tile chess board model.
//!
//! This file exposes the board data model (tiles, pieces, identifier
//! registry, board, game) and the terminal renderer so the binary, benches
//! and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_config;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod identifier_registry;
    pub mod move_event;
    pub mod piece;
    pub mod tile;
}

pub mod utils {
    pub mod render_board;
}
