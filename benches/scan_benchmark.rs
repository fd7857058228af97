use bitscan::{BitScan, PreserveLsb};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::distributions::{Distribution, Uniform};

fn bench_scan(b: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let sample = Uniform::new(0, u64::MAX);

    let mut group = b.benchmark_group("scan");
    group.bench_function("fls branchless", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.fls()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("fls intrinsic", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(u64::BITS - e.leading_zeros()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("ffs branchless", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.ffs()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("clz branchless", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.clz()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("clz intrinsic", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.leading_zeros()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("ctz branchless", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.ctz()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("ctz intrinsic", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.trailing_zeros()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("preserve_lsb branchless", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.preserve_lsb()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("preserve_lsb intrinsic", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e & e.wrapping_neg()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
