//! Benchmarks for full layout generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delve::generation::utils;
use delve::{generate_layout, GenerationConfig, TileLayers};

fn bench_default_layout(c: &mut Criterion) {
    let config = GenerationConfig::default();
    c.bench_function("generate_layout_default", |b| {
        b.iter(|| {
            let mut rng = utils::create_rng(&config);
            generate_layout(black_box(&config), &mut rng)
        })
    });
}

fn bench_tile_derivation(c: &mut Criterion) {
    let config = GenerationConfig::default();
    let layout = generate_layout(&config, &mut utils::create_rng(&config)).unwrap();
    c.bench_function("derive_tiles_default", |b| {
        b.iter(|| TileLayers::derive(black_box(&layout.floor)))
    });
}

criterion_group!(benches, bench_default_layout, bench_tile_derivation);
criterion_main!(benches);
