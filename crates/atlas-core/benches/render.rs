use atlas_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_render(c: &mut Criterion) {
    let cfg = AtlasConfig::default();
    let tables = embedded();

    c.bench_function("render spots (bundled state)", |b| {
        b.iter(|| render_tab(black_box("Kerala"), Tab::Spots, tables, &cfg))
    });
    c.bench_function("render spots (placeholder state)", |b| {
        b.iter(|| render_tab(black_box("Atlantis"), Tab::Spots, tables, &cfg))
    });
    c.bench_function("render precautions", |b| {
        b.iter(|| render_tab(black_box("Goa"), Tab::Precautions, tables, &cfg))
    });
    c.bench_function("fallback region set", |b| {
        b.iter(|| RegionSet::from_response(black_box(None)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
