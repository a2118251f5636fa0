//! Benchmark: dense table versus rolling-array path counting.
//!
//! Run with:
//! `cargo bench --bench count_paths`
//!
//! Tall grids exercise the transposition path of the stride counter.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use snake_paths::{count_paths, count_paths_sparse, BlockedSet, CellFlag, Grid};

fn random_grid(rng: &mut StdRng, rows: usize, columns: usize) -> Grid {
    let last = rows * columns - 1;
    let cells = (0..rows * columns)
        .map(|idx| {
            if idx != 0 && idx != last && rng.gen_bool(0.05) {
                CellFlag::Blocked
            } else {
                CellFlag::Open
            }
        })
        .collect();
    Grid::new(rows, columns, cells).unwrap()
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_paths");

    for &(rows, columns) in &[(256usize, 256usize), (1_024, 64), (2_048, 2_048)] {
        group.bench_function(format!("dense_{rows}x{columns}"), |b| {
            b.iter_batched(
                || random_grid(&mut StdRng::seed_from_u64(42), rows, columns),
                |grid| criterion::black_box(count_paths(&grid)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("sparse_{rows}x{columns}"), |b| {
            b.iter_batched(
                || {
                    let grid = random_grid(&mut StdRng::seed_from_u64(42), rows, columns);
                    BlockedSet::from_grid(&grid).unwrap()
                },
                |set| criterion::black_box(count_paths_sparse(&set)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count);
criterion_main!(benches);
