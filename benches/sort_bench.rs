//! Bitrie sort against the standard library sorts on random integer inputs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{thread_rng, Rng};

const SIZES: [usize; 4] = [1 << 8, 1 << 10, 1 << 14, 1 << 16];

fn random_values(size: usize, max: u64) -> Vec<u64> {
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen_range(0..=max)).collect()
}

pub fn sort_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random_u64");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let values = random_values(size, u64::MAX);

        group.bench_with_input(BenchmarkId::new("bitrie", size), &values, |b, values| {
            b.iter(|| std::hint::black_box(bitrie::sort(values)))
        });

        group.bench_with_input(BenchmarkId::new("std_sort", size), &values, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort();
                std::hint::black_box(v)
            })
        });

        group.bench_with_input(
            BenchmarkId::new("std_sort_unstable", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut v = values.clone();
                    v.sort_unstable();
                    std::hint::black_box(v)
                })
            },
        );
    }
    group.finish();
}

// Narrow keys mean a shallow trie and many duplicates per terminal node.
pub fn sort_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_narrow_u64");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let values = random_values(size, 255);

        group.bench_with_input(BenchmarkId::new("bitrie", size), &values, |b, values| {
            b.iter(|| std::hint::black_box(bitrie::sort(values)))
        });

        group.bench_with_input(BenchmarkId::new("std_sort", size), &values, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort();
                std::hint::black_box(v)
            })
        });
    }
    group.finish();
}

criterion_group!(sort_benches, sort_random, sort_narrow);
criterion_main!(sort_benches);
