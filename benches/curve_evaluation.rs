//! Performance benchmarks for domain generation and curve evaluation
//!
//! The evaluation stage is an element-wise map of five closed-form
//! formulas, so cost should scale linearly with the grid size. These
//! benchmarks pin that scaling and give a baseline for the default
//! 101-point grid.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench curve_evaluation
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use wrm_rs::domain::Domain;
use wrm_rs::methods::standard_curves;

fn bench_domain_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain_generation");

    for samples in [101, 1_001, 10_001] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |b, &samples| {
                b.iter(|| Domain::uniform(black_box(1.0), black_box(samples)));
            },
        );
    }

    group.finish();
}

fn bench_curve_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_evaluation");
    let methods = standard_curves();

    for samples in [101, 1_001, 10_001] {
        let domain = Domain::uniform(1.0, samples);
        group.bench_with_input(
            BenchmarkId::new("five_curves", samples),
            &domain,
            |b, domain| {
                b.iter(|| {
                    for method in &methods {
                        black_box(method.evaluate_on(domain));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_domain_generation, bench_curve_evaluation);
criterion_main!(benches);
