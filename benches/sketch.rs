use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pinsketch::prelude::*;

fn make_items(count: u64, seed: u64) -> Vec<Element> {
    (0..count).map(|i| Element(seed.wrapping_mul(2_654_435_761).wrapping_add(i))).collect()
}

fn bench_encode(c: &mut Criterion) {
    let items = make_items(32, 1);

    c.bench_function("sketch encode capacity=8", |b| {
        b.iter(|| {
            let mut sketch = Sketch::new(8);
            sketch.add(black_box(&items).iter().copied());
            black_box(sketch.capacity())
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    let mut alice = Sketch::new(16);
    alice.add(make_items(10, 1));
    let mut bob = Sketch::new(16);
    bob.add(make_items(10, 2));

    c.bench_function("sketch merge capacity=16", |b| {
        b.iter(|| black_box(alice.merge(black_box(&bob))))
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut sketch = Sketch::new(8);
    sketch.add(make_items(6, 7));

    c.bench_function("sketch decode capacity=8 items=6", |b| {
        b.iter(|| black_box(sketch.decode()))
    });
}

criterion_group!(benches, bench_encode, bench_merge, bench_decode);
criterion_main!(benches);
