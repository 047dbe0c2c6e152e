//! # Logical Clock Traits
//!
//! The operation set every per-key Lamport clock exposes, independent of how
//! it stores or bounds its state.
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────┐
//!   │                  LogicalClock<K>                        │
//!   │                                                         │
//!   │  get(&, &K) → Timestamp           read, never advances  │
//!   │  increment(&, &K) → Timestamp     local event           │
//!   │  merge(&, &K, Timestamp) → Timestamp   receive event    │
//!   └────────────────────────────┬────────────────────────────┘
//!                                │
//!                                ▼
//!                 ┌──────────────────────────────┐
//!                 │   BoundedLogicalClock<K>     │
//!                 │                              │
//!                 │  capacity(&) → usize         │
//!                 │  len(&) → usize              │
//!                 │  contains(&, &K) → bool      │
//!                 └──────────────────────────────┘
//! ```
//!
//! All methods take `&self`: implementations are shared between threads and
//! synchronize internally.
//!
//! ## Usage Pattern
//!
//! ```
//! use lampstamp::traits::LogicalClock;
//! use lampstamp::table::BoundedClockTable;
//!
//! fn stamp_and_forward<C: LogicalClock<str>>(sender: &C, receiver: &C, id: &str) -> u64 {
//!     let sent = sender.increment(id);
//!     receiver.merge(id, sent)
//! }
//!
//! let client: BoundedClockTable = BoundedClockTable::new(16);
//! let server: BoundedClockTable = BoundedClockTable::new(16);
//! assert_eq!(stamp_and_forward(&client, &server, "msg-1"), 2);
//! ```

/// Lamport timestamp. `0` is the ground value of a key never seen.
pub type Timestamp = u64;

/// Per-key Lamport clock operations.
///
/// `K` is the borrowed key form used for lookups (`str` for `String` keys).
pub trait LogicalClock<K: ?Sized> {
    /// Current timestamp for `key`, or `0` if unknown. Never advances the clock.
    fn get(&self, key: &K) -> Timestamp;

    /// Records a local event: stores and returns `current + 1`.
    fn increment(&self, key: &K) -> Timestamp;

    /// Records receipt of an event stamped `received`: stores and returns
    /// `max(current, received) + 1`.
    fn merge(&self, key: &K, received: Timestamp) -> Timestamp;
}

/// A [`LogicalClock`] that forgets keys to stay within a fixed capacity.
///
/// A forgotten key reads as `0` again; callers must treat that as
/// "prior state unknown", not "no prior state".
pub trait BoundedLogicalClock<K: ?Sized>: LogicalClock<K> {
    /// Maximum number of resident keys.
    fn capacity(&self) -> usize;

    /// Number of resident keys.
    fn len(&self) -> usize;

    /// Returns `true` if no key is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` currently has a stored timestamp.
    fn contains(&self, key: &K) -> bool;
}
