//! Bounded, thread-safe table of per-key Lamport clocks.
//!
//! Each key (a message or resource id) owns an independent Lamport counter.
//! The table never holds more than `capacity` keys: admitting a new key into a
//! full table forgets the key that was admitted earliest.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      BoundedClockTable<K>                            │
//!   │                                                                      │
//!   │   RwLock<Inner>  (one lock over both structures)                     │
//!   │   ┌──────────────────────────────┐   ┌────────────────────────────┐  │
//!   │   │ counters: FxHashMap<K, u64>  │   │ ring: EvictionRing<K>      │  │
//!   │   │   "msg-1" → 4                │   │   oldest ──► "msg-1"       │  │
//!   │   │   "msg-2" → 1                │   │              "msg-2"       │  │
//!   │   │   "msg-3" → 9                │   │   newest ──► "msg-3"       │  │
//!   │   └──────────────────────────────┘   └────────────────────────────┘  │
//!   │                                                                      │
//!   │   Both structures always hold exactly the same key set.              │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Update Flow
//!
//! ```text
//!   increment(key) / merge(key, received)
//!        │  write lock
//!        ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ key resident?                                                        │
//!   │   YES → counters[key] = next(counters[key])                          │
//!   │   NO  → ring.pop_if_full_then_push(key)                              │
//!   │           Some(old) → counters.remove(old)                           │
//!   │         counters[key] = next(0)                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   next(t) = t + 1                      (increment)
//!   next(t) = max(t, received) + 1       (merge)
//! ```
//!
//! ## Forgetting
//!
//! Eviction follows admission order, not recency of use: a key that is
//! updated constantly is still forgotten once `capacity` newer keys have been
//! admitted after it. A forgotten key reads as `0` and restarts at `1`.
//! Callers comparing versions across actors should treat a reset as
//! "prior state unknown".
//!
//! ## Performance Characteristics
//!
//! | Operation   | Lock   | Time     |
//! |-------------|--------|----------|
//! | `get`       | shared | O(1)     |
//! | `increment` | write  | O(1)     |
//! | `merge`     | write  | O(1)     |
//! | `clear`     | write  | O(capacity) |
//!
//! Timestamps saturate at `u64::MAX` instead of wrapping.

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::EvictionRing;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::ClockTableMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::ClockTableMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    ClockMetricsReadRecorder, ClockMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};
use crate::traits::{BoundedLogicalClock, LogicalClock, Timestamp};

/// Capacity used by [`Default`] and [`ClockTableBuilder::default`](crate::builder::ClockTableBuilder).
pub const DEFAULT_CAPACITY: usize = 4096;

/// Timestamp reported for keys that are not resident.
pub const DEFAULT_TIMESTAMP: Timestamp = 0;

#[derive(Debug, Clone, Copy)]
enum Event {
    Local,
    Receive(Timestamp),
}

impl Event {
    #[inline]
    fn next(self, current: Timestamp) -> Timestamp {
        match self {
            Event::Local => current.saturating_add(1),
            Event::Receive(received) => current.max(received).saturating_add(1),
        }
    }
}

#[derive(Debug)]
struct Inner<K> {
    counters: FxHashMap<K, Timestamp>,
    ring: EvictionRing<K>,
    #[cfg(feature = "metrics")]
    metrics: ClockTableMetrics,
}

/// Per-key Lamport clocks with a hard cap on resident keys.
///
/// # Example
///
/// ```
/// use lampstamp::table::BoundedClockTable;
///
/// let table: BoundedClockTable = BoundedClockTable::new(2);
///
/// assert_eq!(table.merge("x", 0), 1);
/// assert_eq!(table.merge("x", 10), 11);
/// assert_eq!(table.increment("x"), 12);
///
/// table.increment("y");
/// table.increment("z"); // evicts "x", the earliest admitted key
/// assert_eq!(table.get("x"), 0);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug)]
pub struct BoundedClockTable<K = String> {
    inner: RwLock<Inner<K>>,
}

impl<K> BoundedClockTable<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a table holding at most `capacity` keys.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// user-supplied capacities.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a table holding at most `capacity` keys.
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_options(capacity, false)
    }

    pub(crate) fn with_options(capacity: usize, preallocate: bool) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("clock table capacity must be greater than zero"));
        }
        let ring = EvictionRing::try_new(capacity)?;
        let counters = if preallocate {
            FxHashMap::with_capacity_and_hasher(capacity, Default::default())
        } else {
            FxHashMap::default()
        };
        debug!(capacity, preallocate, "created bounded clock table");
        Ok(Self {
            inner: RwLock::new(Inner {
                counters,
                ring,
                #[cfg(feature = "metrics")]
                metrics: ClockTableMetrics::default(),
            }),
        })
    }

    /// Returns the stored timestamp for `key`, or `0` if it is not resident.
    pub fn get<Q>(&self, key: &Q) -> Timestamp
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let inner = self.inner.read();
        let found = inner.counters.get(key).copied();
        #[cfg(feature = "metrics")]
        {
            if found.is_some() {
                inner.metrics.record_get_hit();
            } else {
                inner.metrics.record_get_miss();
            }
        }
        found.unwrap_or(DEFAULT_TIMESTAMP)
    }

    /// Records a local event for `key` and returns the new timestamp.
    pub fn increment<Q>(&self, key: &Q) -> Timestamp
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.advance(key, Event::Local)
    }

    /// Merges a `received` timestamp into `key`'s clock.
    ///
    /// Stores and returns `max(current, received) + 1`.
    pub fn merge<Q>(&self, key: &Q, received: Timestamp) -> Timestamp
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.advance(key, Event::Receive(received))
    }

    fn advance<Q>(&self, key: &Q, event: Event) -> Timestamp
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        if let Some(value) = inner.counters.get_mut(key) {
            #[cfg(feature = "metrics")]
            Self::record_event(&mut inner.metrics, event, *value);
            *value = event.next(*value);
            return *value;
        }

        #[cfg(feature = "metrics")]
        Self::record_event(&mut inner.metrics, event, DEFAULT_TIMESTAMP);
        let value = event.next(DEFAULT_TIMESTAMP);
        let owned = key.to_owned();
        if let Some(evicted) = inner.ring.pop_if_full_then_push(owned.clone()) {
            inner.counters.remove::<K>(&evicted);
            #[cfg(feature = "metrics")]
            inner.metrics.record_eviction();
            trace!(
                resident = inner.counters.len(),
                capacity = inner.ring.capacity(),
                "evicted oldest clock"
            );
        }
        inner.counters.insert(owned, value);
        #[cfg(feature = "metrics")]
        inner.metrics.record_admission();
        value
    }

    #[cfg(feature = "metrics")]
    fn record_event(metrics: &mut ClockTableMetrics, event: Event, current: Timestamp) {
        match event {
            Event::Local => metrics.record_increment(),
            Event::Receive(received) => {
                metrics.record_merge();
                if received > current {
                    metrics.record_merge_dominated();
                }
            },
        }
    }

    /// Returns `true` if `key` has a stored timestamp.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().counters.contains_key(key)
    }

    /// Number of resident keys.
    pub fn len(&self) -> usize {
        self.inner.read().counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().counters.is_empty()
    }

    /// Maximum number of resident keys.
    pub fn capacity(&self) -> usize {
        self.inner.read().ring.capacity()
    }

    /// Resident keys, earliest admitted first (next eviction candidate first).
    pub fn resident_keys(&self) -> Vec<K> {
        self.inner.read().ring.iter().cloned().collect()
    }

    /// Copies every resident `(key, timestamp)` pair, earliest admitted first.
    pub fn entries(&self) -> Vec<(K, Timestamp)> {
        let inner = self.inner.read();
        inner
            .ring
            .iter()
            .filter_map(|key| inner.counters.get(key).map(|&ts| (key.clone(), ts)))
            .collect()
    }

    /// Forgets every key.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let forgotten = inner.counters.len();
        inner.counters.clear();
        inner.ring.clear();
        #[cfg(feature = "metrics")]
        inner.metrics.record_clear();
        debug!(forgotten, "cleared bounded clock table");
    }

    /// Validates that the counter map and the eviction ring agree.
    ///
    /// Checks that both hold the same key set, that the table is within
    /// capacity, and that no resident key stores the ground timestamp.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: std::fmt::Debug,
    {
        let inner = self.inner.read();
        let capacity = inner.ring.capacity();

        if inner.counters.len() > capacity {
            return Err(InvariantError::new(format!(
                "table holds {} keys but capacity is {}",
                inner.counters.len(),
                capacity
            )));
        }
        if inner.counters.len() != inner.ring.len() {
            return Err(InvariantError::new(format!(
                "map holds {} keys but ring tracks {}",
                inner.counters.len(),
                inner.ring.len()
            )));
        }
        for key in inner.ring.iter() {
            match inner.counters.get(key) {
                None => {
                    return Err(InvariantError::new(format!(
                        "ring tracks {:?} but map has no clock for it",
                        key
                    )));
                },
                Some(&DEFAULT_TIMESTAMP) => {
                    return Err(InvariantError::new(format!(
                        "resident key {:?} stores the ground timestamp",
                        key
                    )));
                },
                Some(_) => {},
            }
        }
        Ok(())
    }
}

impl<K> Default for BoundedClockTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, Q> LogicalClock<Q> for BoundedClockTable<K>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
{
    fn get(&self, key: &Q) -> Timestamp {
        BoundedClockTable::get(self, key)
    }

    fn increment(&self, key: &Q) -> Timestamp {
        BoundedClockTable::increment(self, key)
    }

    fn merge(&self, key: &Q, received: Timestamp) -> Timestamp {
        BoundedClockTable::merge(self, key, received)
    }
}

impl<K, Q> BoundedLogicalClock<Q> for BoundedClockTable<K>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
{
    fn capacity(&self) -> usize {
        BoundedClockTable::capacity(self)
    }

    fn len(&self) -> usize {
        BoundedClockTable::len(self)
    }

    fn contains(&self, key: &Q) -> bool {
        BoundedClockTable::contains(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsSnapshotProvider<ClockTableMetricsSnapshot> for BoundedClockTable<K>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> ClockTableMetricsSnapshot {
        let inner = self.inner.read();
        inner
            .metrics
            .snapshot(inner.counters.len(), inner.ring.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsReset for BoundedClockTable<K>
where
    K: Eq + Hash + Clone,
{
    fn reset_metrics(&self) {
        self.inner.write().metrics = ClockTableMetrics::default();
    }
}
