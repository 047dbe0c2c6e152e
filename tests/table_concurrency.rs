// ==============================================
// CLOCK TABLE CONCURRENCY TESTS (integration)
// ==============================================
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

use lampstamp::table::BoundedClockTable;

mod same_key_contention {
    use super::*;

    #[test]
    fn concurrent_increments_lose_no_updates() {
        let table: Arc<BoundedClockTable> = Arc::new(BoundedClockTable::new(16));
        let num_threads = 8;
        let ops_per_thread = 1_000;
        let barrier = Arc::new(Barrier::new(num_threads));

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let table = table.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    let mut last = 0;
                    for _ in 0..ops_per_thread {
                        let next = table.increment("shared");
                        // Each thread observes its own values strictly increasing.
                        assert!(next > last);
                        last = next;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(
            table.get("shared"),
            (num_threads * ops_per_thread) as u64
        );
    }

    #[test]
    fn concurrent_merges_never_return_duplicates() {
        let table: Arc<BoundedClockTable> = Arc::new(BoundedClockTable::new(4));
        let num_threads = 6;
        let ops_per_thread = 500;

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let table = table.clone();
                thread::spawn(move || {
                    let mut seen = Vec::with_capacity(ops_per_thread);
                    for i in 0..ops_per_thread {
                        let received = (thread_id * 7 + i) as u64 % 50;
                        let next = if i % 3 == 0 {
                            table.increment("k")
                        } else {
                            table.merge("k", received)
                        };
                        assert!(next > received || i % 3 == 0);
                        seen.push(next);
                    }
                    seen
                })
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total, "serialized updates must be unique");
        assert_eq!(table.get("k"), *all.last().unwrap());
    }
}

mod capacity_under_load {
    use super::*;

    #[test]
    fn distinct_keys_from_many_threads_stay_bounded() {
        let capacity = 64;
        let table: Arc<BoundedClockTable> = Arc::new(BoundedClockTable::new(capacity));
        let num_threads = 8;
        let keys_per_thread = 2_000;
        let max_seen = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let table = table.clone();
                let max_seen = max_seen.clone();
                thread::spawn(move || {
                    for i in 0..keys_per_thread {
                        let key = format!("t{}-{}", thread_id, i);
                        if i % 2 == 0 {
                            table.increment(key.as_str());
                        } else {
                            table.merge(key.as_str(), i as u64);
                        }
                        max_seen.fetch_max(table.len(), Ordering::Relaxed);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(table.len(), capacity);
        assert!(max_seen.load(Ordering::Relaxed) <= capacity);
        table.check_invariants().unwrap();
    }

    #[test]
    fn readers_run_alongside_writers() {
        let table: Arc<BoundedClockTable> = Arc::new(BoundedClockTable::new(32));
        let stop = Arc::new(AtomicBool::new(false));
        let reads = Arc::new(AtomicU64::new(0));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                let stop = stop.clone();
                let reads = reads.clone();
                thread::spawn(move || {
                    let mut last = 0;
                    loop {
                        let value = table.get("hot");
                        // Single resident key: never evicted, never goes backwards.
                        if value != 0 {
                            assert!(value >= last);
                            last = value;
                        }
                        reads.fetch_add(1, Ordering::Relaxed);
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }
                    }
                })
            })
            .collect();

        let deadline = Instant::now() + Duration::from_millis(200);
        let mut expected = 0;
        while Instant::now() < deadline && expected < 10_000 {
            expected = table.increment("hot");
        }
        stop.store(true, Ordering::Relaxed);
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(table.get("hot"), expected);
        assert!(reads.load(Ordering::Relaxed) > 0);
    }
}
