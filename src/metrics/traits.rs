//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* so the clock table only
//! ever writes counters and monitoring code only ever reads them.
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │   ClockMetricsRecorder       │   │  ClockMetricsReadRecorder    │
//!   │   (&mut, write lock held)    │   │  (&self, read lock held)     │
//!   │   increment/merge/admit/     │   │  get_hit/get_miss            │
//!   │   evict/clear                │   │                              │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └────────────────┬─────────────────┘
//!                                   ▼
//!                        ClockTableMetrics (counters)
//!                                   │
//!            ┌──────────────────────┴──────────────────────┐
//!            ▼                                             ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters recorded while the table's write lock is held.
pub trait ClockMetricsRecorder {
    fn record_increment(&mut self);
    fn record_merge(&mut self);
    /// A merge whose received timestamp exceeded the local one.
    fn record_merge_dominated(&mut self);
    fn record_admission(&mut self);
    fn record_eviction(&mut self);
    fn record_clear(&mut self);
}

/// Counters recorded from `&self` paths (shared lock only).
pub trait ClockMetricsReadRecorder {
    fn record_get_hit(&self);
    fn record_get_miss(&self);
}

/// Point-in-time copy of metrics, for tests and benchmarks.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
