// Benchmarks comparing fixed-ratio against num-rational's Rational32.
//
// Run with: cargo bench
//
// Operand values are chosen so that num-rational's checked arithmetic does
// not overflow; the cross-reduction cases exercise the overflow-avoidance
// path that is this crate's reason to exist.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use fixed_ratio::Rational;
use num_rational::Rational32;

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(113, 710).unwrap();
    group.bench_function("fixed_ratio", |bench| {
        bench.iter(|| black_box(a).mul(black_box(b)))
    });

    let na = Rational32::new(355, 113);
    let nb = Rational32::new(113, 710);
    group.bench_function("num_rational", |bench| {
        bench.iter(|| black_box(na) * black_box(nb))
    });

    group.finish();
}

fn bench_mul_cross_reduced(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_cross_reduced");

    // Naive 32-bit cross products overflow here
    let a = Rational::new(2147483646, 5).unwrap();
    let b = Rational::new(50, 49981).unwrap();
    group.bench_function("fixed_ratio", |bench| {
        bench.iter(|| black_box(a).mul(black_box(b)))
    });

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    let a = Rational::new(1, 3000).unwrap();
    let b = Rational::new(7, 4500).unwrap();
    group.bench_function("fixed_ratio", |bench| {
        bench.iter(|| black_box(a).add(black_box(b)))
    });

    let na = Rational32::new(1, 3000);
    let nb = Rational32::new(7, 4500);
    group.bench_function("num_rational", |bench| {
        bench.iter(|| black_box(na) + black_box(nb))
    });

    group.finish();
}

fn bench_cmp(c: &mut Criterion) {
    let mut group = c.benchmark_group("cmp");

    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(22, 7).unwrap();
    group.bench_function("fixed_ratio", |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&b)))
    });

    let na = Rational32::new(355, 113);
    let nb = Rational32::new(22, 7);
    group.bench_function("num_rational", |bench| {
        bench.iter(|| black_box(&na).cmp(black_box(&nb)))
    });

    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");

    let a = Rational::new(3, 2).unwrap();
    group.bench_function("fixed_ratio_pow_16", |bench| {
        bench.iter(|| black_box(a).pow(black_box(16)).unwrap())
    });

    let na = Rational32::new(3, 2);
    group.bench_function("num_rational_pow_16", |bench| {
        bench.iter(|| black_box(na).pow(black_box(16)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mul,
    bench_mul_cross_reduced,
    bench_add,
    bench_cmp,
    bench_pow
);
criterion_main!(benches);
