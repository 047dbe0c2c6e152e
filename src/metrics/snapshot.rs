/// Counters and gauges of one [`BoundedClockTable`](crate::table::BoundedClockTable).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockTableMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub increment_calls: u64,
    pub merge_calls: u64,
    pub merge_dominated: u64, // received timestamp > local timestamp

    pub admissions: u64,
    pub evictions: u64,
    pub clears: u64,

    // gauges captured at snapshot time
    pub resident: usize,
    pub capacity: usize,
}

impl ClockTableMetricsSnapshot {
    /// Fraction of `get` calls that found a resident key.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }

    /// Fraction of capacity currently in use.
    pub fn occupancy(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.resident as f64 / self.capacity as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_handle_empty_snapshot() {
        let snap = ClockTableMetricsSnapshot::default();
        assert_eq!(snap.hit_ratio(), 0.0);
        assert_eq!(snap.occupancy(), 0.0);
    }

    #[test]
    fn ratios_from_counters() {
        let snap = ClockTableMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            get_misses: 1,
            resident: 2,
            capacity: 8,
            ..Default::default()
        };
        assert_eq!(snap.hit_ratio(), 0.75);
        assert_eq!(snap.occupancy(), 0.25);
    }
}
