use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frontier::{Queue, Set};
use std::collections::VecDeque;

fn bench_queue(c: &mut Criterion) {
    let size = 10_000;

    c.bench_function("queue_push_pop", |b| {
        b.iter(|| {
            let mut q = Queue::with_capacity(size);
            for i in 0..size {
                q.push(i);
            }
            let mut sum = 0;
            while let Ok(v) = q.pop() {
                sum += v;
            }
            black_box(sum)
        });
    });

    c.bench_function("std_vec_deque_push_pop", |b| {
        b.iter(|| {
            let mut q = VecDeque::with_capacity(size);
            for i in 0..size {
                q.push_back(i);
            }
            let mut sum = 0;
            while let Some(v) = q.pop_front() {
                sum += v;
            }
            black_box(sum)
        });
    });
}

fn bench_set_algebra(c: &mut Criterion) {
    let a: Set<u32> = (0..10_000).collect();
    let b: Set<u32> = (5_000..15_000).collect();

    c.bench_function("set_union_10k", |bench| bench.iter(|| black_box(a.union(&b).len())));
    c.bench_function("set_intersection_10k", |bench| {
        bench.iter(|| black_box(a.intersection(&b).len()))
    });
    c.bench_function("set_difference_10k", |bench| {
        bench.iter(|| black_box(a.difference(&b).len()))
    });
    c.bench_function("set_symmetric_difference_10k", |bench| {
        bench.iter(|| black_box(a.symmetric_difference(&b).len()))
    });
}

fn bench_set_iteration(c: &mut Criterion) {
    let s: Set<u32> = (0..10_000).collect();

    c.bench_function("set_iter_unordered", |b| b.iter(|| black_box(s.iter().sum::<u32>())));
    c.bench_function("set_iter_sorted", |b| {
        b.iter(|| black_box(s.iter_sorted().copied().sum::<u32>()))
    });
}

criterion_group!(benches, bench_queue, bench_set_algebra, bench_set_iteration);
criterion_main!(benches);
