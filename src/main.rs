use rand::prelude::IndexedRandom;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tile_chess::chess_errors::ChessErrors;
use tile_chess::game_state::chess_types::{Color, PieceCategory};
use tile_chess::game_state::game::Game;

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut game = Game::new();
    game.current_mut().reset_board()?;
    println!("{game}");

    // Advance one random white pawn.
    let pawns: Vec<String> = game
        .current()
        .pieces()
        .filter(|p| p.color() == Color::White && p.category() == PieceCategory::Pawn)
        .map(|p| p.id().to_string())
        .collect();
    let mut rng = rand::rng();
    let Some(pawn) = pawns.choose(&mut rng) else {
        warn!("no white pawns on the board");
        return Ok(());
    };
    let spaces = *[1u8, 2].choose(&mut rng).unwrap_or(&1);
    info!(pawn = %pawn, spaces, "advancing pawn");
    game.current_mut().advance_pawn(pawn, spaces)?;
    println!("{game}");

    for event in game.current().events() {
        println!("{event}");
    }
    Ok(())
}
