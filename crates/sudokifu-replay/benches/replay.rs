//! Micro-benchmarks for trace replay.
//!
//! Measures the single-fold `jump_to_end` against the equivalent sequence of
//! `advance` calls, and the cost of `retreat` at a deep cursor, where the
//! backward scan for the prior touch is longest.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench replay
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sudokifu_core::Board;
use sudokifu_replay::{ReplayEngine, StepSequence};

/// A deterministic trace that sweeps the grid the way a backtracking solver
/// does: every seventh step clears the cell about to be written, and traces
/// longer than the grid wrap around and revisit cells.
fn synthetic_trace(len: usize) -> StepSequence {
    let mut triples = Vec::with_capacity(len);
    let mut index = 0u8;
    for step in 0..len {
        let row = index / 9;
        let col = index % 9;
        if step % 7 == 6 {
            triples.push((row, col, 0));
        } else {
            triples.push((row, col, col + 1));
            index = (index + 1) % 81;
        }
    }
    StepSequence::from_wire(triples).expect("synthetic triples are in range")
}

fn bench_jump_to_end(c: &mut Criterion) {
    for len in [81usize, 729] {
        let engine = ReplayEngine::start(Board::new(), synthetic_trace(len));

        c.bench_with_input(BenchmarkId::new("jump_to_end", len), &engine, |b, engine| {
            b.iter_batched_ref(
                || hint::black_box(engine.clone()),
                |engine| engine.jump_to_end(),
                BatchSize::SmallInput,
            );
        });

        c.bench_with_input(
            BenchmarkId::new("advance_to_end", len),
            &engine,
            |b, engine| {
                b.iter_batched_ref(
                    || hint::black_box(engine.clone()),
                    |engine| while engine.advance() {},
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_retreat_at_depth(c: &mut Criterion) {
    for len in [81usize, 729] {
        let mut engine = ReplayEngine::start(Board::new(), synthetic_trace(len));
        engine.jump_to_end();

        c.bench_with_input(
            BenchmarkId::new("retreat_from_end", len),
            &engine,
            |b, engine| {
                b.iter_batched_ref(
                    || hint::black_box(engine.clone()),
                    |engine| hint::black_box(engine.retreat()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_jump_to_end, bench_retreat_at_depth);
criterion_main!(benches);
