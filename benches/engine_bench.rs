//! Benchmarks for line generation and move processing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_ttt::{Coord, GameBuilder, LineSet, Move};

fn bench_line_set(c: &mut Criterion) {
    c.bench_function("line_set_15x15", |b| {
        b.iter(|| LineSet::new(black_box(15)));
    });
}

fn bench_classic_game(c: &mut Criterion) {
    // The five-move row win from the classic 3x3 game, including the
    // win scan after every move.
    c.bench_function("classic_row_win", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new().build();
            for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
                let mv = Move::new(Coord::new(row, col), game.current_player().label());
                game.process_move(mv);
                if !game.has_winner() && !game.is_tied() {
                    game.toggle_player();
                }
            }
            black_box(game.has_winner())
        });
    });
}

fn bench_large_board_scan(c: &mut Criterion) {
    // Worst case for the scan: a 9x9 board filled column by column
    // alternates labels everywhere, so all 81 moves run the full scan
    // and the game ends tied.
    c.bench_function("tied_game_9x9", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new().board_size(9).build();
            for col in 0..9 {
                for row in 0..9 {
                    let mv = Move::new(Coord::new(row, col), game.current_player().label());
                    game.process_move(mv);
                    if !game.has_winner() && !game.is_tied() {
                        game.toggle_player();
                    }
                }
            }
            black_box(game.is_tied())
        });
    });
}

criterion_group!(benches, bench_line_set, bench_classic_game, bench_large_board_scan);
criterion_main!(benches);
