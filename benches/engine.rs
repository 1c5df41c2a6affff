//! Benchmarks for tap handling, move counting and the solver.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pegboard::core::{GameRng, Position};
use pegboard::rules::{handle_tap, legal_jumps, potential_move_count};
use pegboard::solver::{random_playout, Solver};
use pegboard::Board;

fn bench_handle_tap(c: &mut Criterion) {
    let board = Board::with_holes(5, [Position::new(0, 0)]);
    let selected = handle_tap(&board, Position::new(2, 0)).board;

    c.bench_function("handle_tap_select", |b| {
        b.iter(|| handle_tap(black_box(&board), black_box(Position::new(2, 0))))
    });

    c.bench_function("handle_tap_jump", |b| {
        b.iter(|| handle_tap(black_box(&selected), black_box(Position::new(0, 0))))
    });
}

fn bench_move_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("potential_move_count");

    for size in [5u8, 10, 15] {
        let board = Board::with_holes(size, [Position::new(0, 0), Position::new(size - 1, 0)]);
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| potential_move_count(black_box(board)))
        });
    }

    group.finish();

    let board = Board::with_holes(10, [Position::new(4, 2)]);
    c.bench_function("legal_jumps_10", |b| b.iter(|| legal_jumps(black_box(&board))));
}

fn bench_solver(c: &mut Criterion) {
    let board = Board::with_holes(5, [Position::new(0, 0)]);

    c.bench_function("solve_classic", |b| {
        let mut solver = Solver::default();
        b.iter(|| solver.solve(black_box(&board)))
    });
}

fn bench_playout(c: &mut Criterion) {
    let board = Board::new(6);

    c.bench_function("random_playout_6", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| random_playout(black_box(&board), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_handle_tap,
    bench_move_count,
    bench_solver,
    bench_playout
);
criterion_main!(benches);
