use bounded_heap::BoundedMinHeap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N: usize = 100_000; // Number of random priorities

fn random_priorities() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..N).map(|_| rng.gen()).collect()
}

fn bench_push_all(c: &mut Criterion) {
    let priorities = random_priorities();
    c.bench_function("push_all", |b| {
        b.iter(|| {
            let mut heap = BoundedMinHeap::with_capacity(N).unwrap();
            for (i, &p) in priorities.iter().enumerate() {
                heap.push(black_box(i), black_box(p)).unwrap();
            }
            black_box(heap.len())
        })
    });
}

fn bench_push_pop_all(c: &mut Criterion) {
    let priorities = random_priorities();
    c.bench_function("push_pop_all", |b| {
        b.iter(|| {
            let mut heap = BoundedMinHeap::with_capacity(N).unwrap();
            for (i, &p) in priorities.iter().enumerate() {
                heap.push(black_box(i), black_box(p)).unwrap();
            }
            let mut last = 0usize;
            while let Ok(v) = heap.pop() {
                last = v;
            }
            black_box(last)
        })
    });
}

criterion_group!(benches, bench_push_all, bench_push_pop_all);
criterion_main!(benches);
