pub use crate::builder::ClockTableBuilder;
pub use crate::ds::EvictionRing;
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::ClockTableMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
pub use crate::table::{BoundedClockTable, DEFAULT_CAPACITY, DEFAULT_TIMESTAMP};
pub use crate::traits::{BoundedLogicalClock, LogicalClock, Timestamp};
