// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mast_bnb::bnb::MatrixSolver;
use mast_model::{generator::IslandGenerator, island::Island};
use mast_search::monitor::no_op::NoOperationMonitor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SEED: u64 = 0x6d61_7374;

/// Islands with exactly `num_receivers` receivers, all at power zero so
/// that every receiver without a transmitter on its cell is uncovered.
fn instances(num_receivers: usize, count: usize) -> Vec<Island<i64>> {
    let generator = IslandGenerator::new()
        .size(16, 24)
        .transmitters(4, 8)
        .receivers(num_receivers, num_receivers)
        .power(0, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..count).map(|_| generator.generate(&mut rng)).collect()
}

fn bench_matrix_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("MatrixSolver");

    for num_receivers in [2usize, 4, 6] {
        let islands = instances(num_receivers, 8);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_receivers),
            &islands,
            |b, islands| {
                let mut solver = MatrixSolver::preallocated(num_receivers);
                let mut monitor = NoOperationMonitor::new();
                b.iter(|| {
                    for island in islands {
                        black_box(solver.solve(black_box(island), &mut monitor));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_solver);
criterion_main!(benches);
