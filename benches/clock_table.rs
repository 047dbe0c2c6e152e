//! Benchmarks for BoundedClockTable.
//!
//! Run with: `cargo bench --bench clock_table`

use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use lampstamp::table::BoundedClockTable;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Zipf};

fn random_keys(count: usize, seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| format!("{:016x}-{:016x}", rng.random::<u64>(), rng.random::<u64>()))
        .collect()
}

// ============================================================================
// Fresh keys (every call admits, most calls evict)
// ============================================================================

fn bench_merge_fresh_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_table");
    let keys = random_keys(8192, 7);
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("merge_fresh_keys", |b| {
        b.iter_batched(
            || BoundedClockTable::<String>::new(1024),
            |table| {
                for key in &keys {
                    black_box(table.merge(key.as_str(), 2));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// Resident keys (no admission, no eviction)
// ============================================================================

fn bench_increment_resident(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_table");
    let keys = random_keys(1024, 11);
    let table = BoundedClockTable::<String>::new(1024);
    for key in &keys {
        table.increment(key.as_str());
    }
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("increment_resident", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(table.increment(black_box(key.as_str())));
            }
        })
    });

    group.bench_function("get_resident", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(table.get(black_box(key.as_str())));
            }
        })
    });

    group.finish();
}

// ============================================================================
// Skewed workload (hot keys stay resident, cold tail churns)
// ============================================================================

fn bench_zipf_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_table");
    let universe = 16_384u64;
    let ops = 8192usize;
    let zipf = Zipf::new(universe as f64, 1.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let workload: Vec<(u64, u64)> = (0..ops)
        .map(|_| {
            let key = (zipf.sample(&mut rng) as u64).saturating_sub(1);
            (key, rng.random::<u64>() % 1_000)
        })
        .collect();
    group.throughput(Throughput::Elements(ops as u64));

    group.bench_function("zipf_mixed", |b| {
        b.iter_batched(
            || BoundedClockTable::<u64>::new(1024),
            |table| {
                for (i, (key, received)) in workload.iter().enumerate() {
                    match i % 4 {
                        0 => black_box(table.get(key)),
                        1 => black_box(table.increment(key)),
                        _ => black_box(table.merge(key, *received)),
                    };
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// Contended merges from several threads
// ============================================================================

fn bench_parallel_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_table");
    let threads = 4;
    let per_thread: Vec<Arc<Vec<String>>> = (0..threads)
        .map(|t| Arc::new(random_keys(2048, 100 + t as u64)))
        .collect();
    group.throughput(Throughput::Elements((threads * 2048) as u64));

    group.bench_function("parallel_merge_4_threads", |b| {
        b.iter(|| {
            let table = Arc::new(BoundedClockTable::<String>::new(102_400));
            let handles: Vec<_> = per_thread
                .iter()
                .map(|keys| {
                    let table = table.clone();
                    let keys = keys.clone();
                    thread::spawn(move || {
                        for key in keys.iter() {
                            black_box(table.merge(key.as_str(), 2));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_fresh_keys,
    bench_increment_resident,
    bench_zipf_mixed,
    bench_parallel_merge
);
criterion_main!(benches);
