use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use intset_core::{IntSet, difference, intersect, is_subset_of, parse, union};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_set(rng: &mut SmallRng, len: usize) -> IntSet {
    (0..len).map(|_| rng.random_range(0..(len as i32 * 4))).collect()
}

fn bench_algebra(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut group = c.benchmark_group("algebra");

    for len in [16, 256, 4096] {
        let a = random_set(&mut rng, len);
        let b = random_set(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("union", len), &len, |bench, _| {
            bench.iter(|| union(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("intersect", len), &len, |bench, _| {
            bench.iter(|| intersect(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("difference", len), &len, |bench, _| {
            bench.iter(|| difference(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("subset", len), &len, |bench, _| {
            bench.iter(|| is_subset_of(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let text = random_set(&mut rng, 1024).to_string();
    c.bench_function("parse_1024", |bench| bench.iter(|| parse(black_box(&text))));
}

criterion_group!(benches, bench_algebra, bench_parse);
criterion_main!(benches);
