use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::color::Color;
use othello_core::search::{search, search_parallel};
use othello_core::{Board, Square, apply_move};

/// Midgame position reached after a short diagonal opening.
fn midgame() -> Board {
    let moves = [
        Square::F5,
        Square::F6,
        Square::E6,
        Square::F4,
        Square::E3,
        Square::C5,
        Square::C4,
        Square::D3,
    ];
    let mut board = Board::new();
    let mut color = Color::Black;
    for sq in moves {
        board = apply_move(&board, sq, color).expect("opening line is legal");
        color = color.opponent();
    }
    board
}

fn search_benchmark(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for depth in [2, 4, 6] {
        group.bench_with_input(BenchmarkId::new("sequential", depth), &depth, |b, &depth| {
            b.iter(|| search(black_box(&board), depth, Color::Black));
        });
        group.bench_with_input(BenchmarkId::new("parallel", depth), &depth, |b, &depth| {
            b.iter(|| search_parallel(black_box(&board), depth, Color::Black));
        });
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
