//! lampstamp: bounded, concurrent per-key Lamport timestamps.
//!
//! [`BoundedClockTable`](table::BoundedClockTable) keeps one Lamport counter
//! per key behind a single reader/writer lock and forgets the earliest
//! admitted key once it reaches capacity. [`EvictionRing`](ds::EvictionRing)
//! is the fixed-size FIFO that picks which key to forget.

pub mod builder;
pub mod ds;
pub mod error;
pub mod table;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
