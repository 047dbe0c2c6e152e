use criterion::{Criterion, criterion_group, criterion_main};
use lampstamp::ds::EvictionRing;

fn bench_ring_admit_churn(c: &mut Criterion) {
    c.bench_function("eviction_ring_admit_churn", |b| {
        b.iter(|| {
            let mut ring = EvictionRing::new(1024);
            let mut evicted = 0u64;
            for i in 0..8192u64 {
                if let Some(old) = ring.pop_if_full_then_push(i) {
                    evicted += old;
                }
            }
            std::hint::black_box(evicted)
        })
    });
}

fn bench_ring_push_pop(c: &mut Criterion) {
    c.bench_function("eviction_ring_push_pop", |b| {
        let mut ring = EvictionRing::new(1024);
        b.iter(|| {
            for i in 0..512u64 {
                ring.push(i);
            }
            while let Some(key) = ring.pop() {
                std::hint::black_box(key);
            }
        })
    });
}

criterion_group!(benches, bench_ring_admit_churn, bench_ring_push_pop);
criterion_main!(benches);
