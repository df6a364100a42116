//! Criterion benchmarks for the branch-and-bound engine.
//!
//! Uses seeded random asymmetric instances so every strategy sees the
//! same matrices across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_bnb::bnb::{BnbConfig, BnbRunner, BoundRule, Strategy};
use u_bnb::matrix::CostMatrix;

// ===========================================================================
// Traversal strategies
// ===========================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_strategy");
    group.sample_size(10);

    for &n in &[6usize, 8, 10] {
        let matrix = CostMatrix::random(n, 100, 42).expect("valid instance");
        for strategy in Strategy::ALL {
            // The queue holds whole levels of the tree; keep it small.
            if strategy == Strategy::BreadthFirst && n > 8 {
                continue;
            }
            let config = BnbConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.label(), n),
                &(&matrix, config),
                |b, (m, cfg)| {
                    b.iter(|| {
                        let result = BnbRunner::run(black_box(m), black_box(cfg));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Bound rules
// ===========================================================================

fn bench_bound_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_bound");
    group.sample_size(10);

    let matrix = CostMatrix::random(9, 100, 7).expect("valid instance");
    for (name, rule) in [
        ("nearest_successor", BoundRule::NearestSuccessor),
        ("nearest_remaining", BoundRule::NearestRemaining),
    ] {
        let config = BnbConfig::default().with_bound(rule);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, cfg| {
            b.iter(|| {
                let result = BnbRunner::run(black_box(&matrix), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_bound_rules);
criterion_main!(benches);
