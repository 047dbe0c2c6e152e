//! Optional observability counters for [`BoundedClockTable`](crate::table::BoundedClockTable).
//!
//! Enabled with the `metrics` cargo feature. Recording happens under the
//! table's own lock; reading goes through [`MetricsSnapshotProvider`] and
//! publishing through a [`MetricsExporter`] such as
//! [`PrometheusTextExporter`](exporter::PrometheusTextExporter).
//!
//! ```
//! use lampstamp::metrics::traits::MetricsSnapshotProvider;
//! use lampstamp::table::BoundedClockTable;
//!
//! let table: BoundedClockTable = BoundedClockTable::new(1);
//! table.increment("a");
//! table.increment("b");
//!
//! let snap = table.snapshot();
//! assert_eq!(snap.admissions, 2);
//! assert_eq!(snap.evictions, 1);
//! ```
//!
//! [`MetricsSnapshotProvider`]: traits::MetricsSnapshotProvider
//! [`MetricsExporter`]: traits::MetricsExporter

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
