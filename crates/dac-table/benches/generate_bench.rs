//! Criterion benchmarks for table generation.
//!
//! Run with: cargo bench --bench generate_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dac_table::{generate, WaveformParameters};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &n in &[200u32, 2048, 16384] {
        let params = WaveformParameters::new(50.0, n, 12, 1.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| black_box(generate(black_box(params))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
