//! Benchmarks for rendering config scripts and snapshots.
//!
//! Run with: `cargo bench -p tessera`
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! - `scripts`: config script rendering per domain
//! - `snapshots`: JSON snapshot encoding per domain
//! - `reduce`: dispatching edits through the composite reducer

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tessera_lib::persistence::RoutingTable;
use tessera_lib::settings::{Domain, HotkeyCommand, KeyScheme, WindowLayoutCommand};
use tessera_lib::store::{Reducer, RootCommand, RootState, build_reducer};

// ============================================================================
// Test Data
// ============================================================================

/// A root state with non-default values in every domain.
fn edited_state() -> RootState {
    let reducer = build_reducer(&RoutingTable::new("/nonexistent"));
    [
        RootCommand::from(WindowLayoutCommand::SetWindowGap(12)),
        RootCommand::from(WindowLayoutCommand::SetSplitRatio(0.6)),
        RootCommand::from(HotkeyCommand::SetScheme(KeyScheme::Vim)),
    ]
    .iter()
    .fold(RootState::default(), |state, command| reducer.reduce(state, command))
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_scripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripts");
    let state = edited_state();

    for domain in Domain::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(domain), &domain, |b, &domain| {
            b.iter(|| black_box(&state).config_script(black_box(domain)));
        });
    }

    group.finish();
}

fn bench_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshots");
    let state = edited_state();

    for domain in Domain::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(domain), &domain, |b, &domain| {
            b.iter(|| black_box(&state).snapshot_value(black_box(domain)));
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let reducer = build_reducer(&RoutingTable::new("/nonexistent"));
    let command = RootCommand::from(WindowLayoutCommand::SetWindowGap(8));

    c.bench_function("reduce/window_gap", |b| {
        b.iter(|| reducer.reduce(black_box(RootState::default()), black_box(&command)));
    });
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_scripts, bench_snapshots, bench_reduce);

criterion_main!(benches);
