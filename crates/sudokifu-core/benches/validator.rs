//! Micro-benchmarks for placement validation.
//!
//! Measures the per-edit cost of the row/column/box scan on boards at both
//! ends of the occupancy range, and the whole-board conflict sweep that runs
//! after each edit.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench validator
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudokifu_core::{Board, Cell, Digit, Origin, Position, validator};

/// A complete, conflict-free grid built from the shifted-rows construction.
fn solved_board() -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        let value = (pos.row * 3 + pos.row / 3 + pos.col) % 9 + 1;
        let digit = Digit::new(value).unwrap();
        board.set(pos, Cell::filled(Origin::Given, digit));
    }
    board
}

fn bench_is_placement_valid(c: &mut Criterion) {
    let solved = solved_board();
    let cases = [
        ("empty", Board::new(), Digit::D5),
        // (4, 4) holds a 9 in the solved grid, so probing 9 scans all 27
        // peers without a hit while probing 5 exits on the first duplicate.
        ("full_scan", solved.clone(), Digit::D9),
        ("early_exit", solved, Digit::D5),
    ];

    for (param, board, digit) in cases {
        c.bench_with_input(
            BenchmarkId::new("is_placement_valid", param),
            &(board, digit),
            |b, (board, digit)| {
                b.iter(|| {
                    let pos = hint::black_box(Position::new(4, 4));
                    let valid = validator::is_placement_valid(board, pos, Some(*digit));
                    hint::black_box(valid)
                });
            },
        );
    }
}

fn bench_conflicts(c: &mut Criterion) {
    let mut uniform = Board::new();
    for pos in Position::ALL {
        uniform.set(pos, Cell::filled(Origin::Given, Digit::D5));
    }
    let boards = [
        ("empty", Board::new()),
        ("solved", solved_board()),
        ("uniform", uniform),
    ];

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("conflicts", param), &board, |b, board| {
            b.iter(|| hint::black_box(validator::conflicts(board)));
        });
    }
}

criterion_group!(benches, bench_is_placement_valid, bench_conflicts);
criterion_main!(benches);
