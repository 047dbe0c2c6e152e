use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::ClockTableMetricsSnapshot;
use crate::metrics::traits::{ClockMetricsReadRecorder, ClockMetricsRecorder};

#[derive(Debug, Default)]
pub struct ClockTableMetrics {
    pub get_hits: MetricsCell,
    pub get_misses: MetricsCell,
    pub increment_calls: u64,
    pub merge_calls: u64,
    pub merge_dominated: u64,
    pub admissions: u64,
    pub evictions: u64,
    pub clears: u64,
}

impl ClockTableMetrics {
    pub fn new() -> ClockTableMetrics {
        Self::default()
    }

    pub fn snapshot(&self, resident: usize, capacity: usize) -> ClockTableMetricsSnapshot {
        let get_hits = self.get_hits.get();
        let get_misses = self.get_misses.get();
        ClockTableMetricsSnapshot {
            get_calls: get_hits + get_misses,
            get_hits,
            get_misses,
            increment_calls: self.increment_calls,
            merge_calls: self.merge_calls,
            merge_dominated: self.merge_dominated,
            admissions: self.admissions,
            evictions: self.evictions,
            clears: self.clears,
            resident,
            capacity,
        }
    }
}

impl ClockMetricsRecorder for ClockTableMetrics {
    fn record_increment(&mut self) {
        self.increment_calls += 1;
    }

    fn record_merge(&mut self) {
        self.merge_calls += 1;
    }

    fn record_merge_dominated(&mut self) {
        self.merge_dominated += 1;
    }

    fn record_admission(&mut self) {
        self.admissions += 1;
    }

    fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl ClockMetricsReadRecorder for ClockTableMetrics {
    fn record_get_hit(&self) {
        self.get_hits.incr();
    }

    fn record_get_miss(&self) {
        self.get_misses.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_sums_get_calls() {
        let mut metrics = ClockTableMetrics::new();
        metrics.record_get_hit();
        metrics.record_get_miss();
        metrics.record_get_miss();
        metrics.record_admission();
        metrics.record_eviction();
        metrics.record_clear();

        let snap = metrics.snapshot(3, 10);
        assert_eq!(snap.get_calls, 3);
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 2);
        assert_eq!(snap.admissions, 1);
        assert_eq!(snap.evictions, 1);
        assert_eq!(snap.clears, 1);
        assert_eq!(snap.resident, 3);
        assert_eq!(snap.capacity, 10);
    }
}
