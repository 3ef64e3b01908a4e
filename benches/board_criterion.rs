use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use tile_chess::game_state::board::Board;
use tile_chess::game_state::board_config::BoardConfig;

fn bench_reset(c: &mut Criterion) {
    let mut board = Board::new();
    c.bench_function("reset_board", |b| {
        b.iter(|| {
            board.reset_board().expect("reset should succeed");
            black_box(board.piece_count())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for (name, ansi) in [("ansi", true), ("plain", false)] {
        let mut board = Board::with_config(BoardConfig::default().with_ansi_colors(ansi));
        board.reset_board().expect("reset should succeed");
        group.bench_function(name, |b| b.iter(|| black_box(board.render())));
    }
    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let config = BoardConfig::default().with_record_events(false);
    c.bench_function("move_piece_round_trip", |b| {
        b.iter_batched(
            || {
                let mut board = Board::with_config(config.clone());
                board.reset_board().expect("reset should succeed");
                board
            },
            |mut board| {
                board.move_piece("WN1", 5, 2).expect("square is free");
                board.move_piece("WN1", 7, 1).expect("square is free");
                board
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_reset, bench_render, bench_move);
criterion_main!(benches);
