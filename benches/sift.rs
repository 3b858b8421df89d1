//! Benchmarks for the composition predicate.
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textsift::services::{should_filter, should_filter_bytes};

fn ascii_input(len: usize) -> String {
    "Press [A] to continue, 2024! "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_ascii_full_scan(c: &mut Criterion) {
    let input = ascii_input(4096);

    c.bench_function("should_filter_ascii_4k", |b| {
        b.iter(|| should_filter(black_box(&input)))
    });
}

fn bench_early_exit(c: &mut Criterion) {
    // Disqualifying byte in the first position exercises the early exit.
    let mut input = String::from("火");
    input.push_str(&ascii_input(4096));

    c.bench_function("should_filter_early_exit", |b| {
        b.iter(|| should_filter(black_box(&input)))
    });
}

fn bench_raw_bytes(c: &mut Criterion) {
    let input: Vec<u8> = ascii_input(4096).into_bytes();

    c.bench_function("should_filter_bytes_ascii_4k", |b| {
        b.iter(|| should_filter_bytes(black_box(&input)))
    });
}

criterion_group!(benches, bench_ascii_full_scan, bench_early_exit, bench_raw_bytes);
criterion_main!(benches);
