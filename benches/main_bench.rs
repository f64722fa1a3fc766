use criterion::{criterion_group, criterion_main, Criterion};
use gol_core::{ConwayField, Neighborhood};

fn bench_moore_bitwise(c: &mut Criterion) {
    const N: usize = 1 << 10;
    let mut life = ConwayField::blank(N, N, Neighborhood::Moore);
    life.randomize(Some(42));
    c.bench_function("moore_bitwise", |b| b.iter(|| life.update(1)));
}

fn bench_von_neumann_scalar(c: &mut Criterion) {
    const N: usize = 1 << 8;
    let mut life = ConwayField::blank(N, N, Neighborhood::VonNeumann);
    life.randomize(Some(42));
    c.bench_function("von_neumann_scalar", |b| b.iter(|| life.update(1)));
}

criterion_group!(benches, bench_moore_bitwise, bench_von_neumann_scalar);
criterion_main!(benches);
