//! Benchmarks for the Move-to-Front Transform.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxibwt::{MoveToFront, bwt, mtf};
use std::hint::black_box;

fn generate_text(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        data.extend_from_slice(&text[..remaining.min(text.len())]);
    }
    data
}

fn generate_random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn bench_mtf(c: &mut Criterion) {
    let mut group = c.benchmark_group("mtf");

    let text = generate_text(64 * 1024);
    let cases = [
        ("text", text.clone()),
        ("bwt_text", bwt::transform(&text).column),
        ("random", generate_random(64 * 1024)),
    ];

    for (name, data) in &cases {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), data, |b, data| {
            b.iter(|| black_box(mtf::encode(black_box(data))));
        });

        let ranks = mtf::encode(data);
        group.bench_with_input(BenchmarkId::new("decode", name), &ranks, |b, ranks| {
            b.iter(|| black_box(mtf::decode(black_box(ranks))));
        });
    }

    let codec = MoveToFront::with_alphabet(&mtf::used_symbols(&text)).unwrap();
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("encode_fitted_alphabet", |b| {
        b.iter(|| black_box(codec.encode(black_box(&text))));
    });

    group.finish();
}

criterion_group!(benches, bench_mtf);
criterion_main!(benches);
