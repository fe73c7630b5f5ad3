use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use seqsort::prelude::*;
use std::hint::black_box;

fn bench_int_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Int Run Sort");

    group.bench_function("sort_run (demo array)", |b| {
        b.iter_batched(
            IntArray::demo,
            |mut array| sort_run(black_box(array.run_start()), IntArray::num_elements()),
            BatchSize::SmallInput,
        )
    });

    let mut rng = rand::rng();
    let random_ints: Vec<i32> = (0..10_000).map(|_| rng.random()).collect();

    group.bench_function("sort_run (10k)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| {
                let count = data.len();
                sort_run(black_box(RunStart::new(&mut data)), count)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_char_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("Char Vector Sort");

    let mut rng = rand::rng();
    let random_chars: Vec<char> = (0..10_000).map(|_| rng.random::<char>()).collect();

    // By value pays for the clone on every call.
    group.bench_function("sort_by_value", |b| {
        b.iter(|| sort_by_value(black_box(random_chars.clone()), |sorted| sorted.len()))
    });

    group.bench_function("sort_by_ref", |b| {
        b.iter_batched(
            || random_chars.clone(),
            |mut data| sort_by_ref(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_int_runs, bench_char_vectors);
criterion_main!(benches);
