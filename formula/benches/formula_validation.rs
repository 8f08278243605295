//! FILENAME: formula/benches/formula_validation.rs
//! PURPOSE: Throughput of tokenizing and validating formulas of growing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formula::{tokenize, Formula};

/// Builds "(x1 + 2.50) * (x2 + 2.50) * ..." with `terms` groups.
fn build_formula(terms: usize) -> String {
    (1..=terms)
        .map(|i| format!("(x{} + 2.50)", i))
        .collect::<Vec<_>>()
        .join(" * ")
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for terms in [1, 16, 256] {
        let input = build_formula(terms);
        group.bench_with_input(BenchmarkId::from_parameter(terms), &input, |b, input| {
            b.iter(|| tokenize(black_box(input)))
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for terms in [1, 16, 256] {
        let input = build_formula(terms);
        group.bench_with_input(BenchmarkId::from_parameter(terms), &input, |b, input| {
            b.iter(|| Formula::new(black_box(input)))
        });
    }
    group.finish();
}

fn bench_variables(c: &mut Criterion) {
    let formula = Formula::new(&build_formula(256)).unwrap();
    c.bench_function("variables_256", |b| b.iter(|| black_box(&formula).variables()));
}

criterion_group!(benches, bench_tokenize, bench_validate, bench_variables);
criterion_main!(benches);
