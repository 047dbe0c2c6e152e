//! Fixed-capacity FIFO ring of keys used to pick eviction victims.
//!
//! Records the order in which keys were admitted and answers "which key is the
//! oldest?" in O(1) without ever growing past its initial allocation. The ring
//! stores keys only; it knows nothing about the values its owner keeps for them.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                       EvictionRing<K>  (capacity = 4)                │
//!   │                                                                      │
//!   │   slots: Vec<Option<K>>        head: oldest entry                    │
//!   │   len:   live entries          tail: next write position             │
//!   │                                                                      │
//!   │   After push(a), push(b), push(c), push(d), push(e):                 │
//!   │                                                                      │
//!   │   Index:     0     1     2     3                                     │
//!   │            ┌─────┬─────┬─────┬─────┐                                 │
//!   │   slots:   │  e  │  b  │  c  │  d  │      len = 4 (full)             │
//!   │            └─────┴─────┴─────┴─────┘                                 │
//!   │                    ▲                                                 │
//!   │                    └── head = tail = 1 (b is the oldest)             │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Admission Flow
//!
//! ```text
//!   pop_if_full_then_push(key)
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ len == capacity?                                                     │
//!   │   YES → take slots[head], advance head, len -= 1 → Some(evicted)     │
//!   │   NO  → None                                                         │
//!   └──────────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   slots[tail] = key, advance tail, len += 1
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation               | Time | Notes                                |
//! |-------------------------|------|--------------------------------------|
//! | `push`                  | O(1) | Overwrites the oldest key when full  |
//! | `pop_if_full_then_push` | O(1) | Reports the overwritten key          |
//! | `pop`                   | O(1) | Oldest first                         |
//! | `peek_oldest`           | O(1) |                                      |
//!
//! ## Notes
//! - An explicit `len` disambiguates full from empty, so all `capacity`
//!   slots are usable.
//! - Not thread-safe. The owning [`BoundedClockTable`](crate::table::BoundedClockTable)
//!   only touches it while holding its write lock.
//! - `debug_validate_invariants()` is available in debug/test builds.

use crate::error::ConfigError;

/// Fixed-size circular FIFO of keys.
///
/// # Example
///
/// ```
/// use lampstamp::ds::EvictionRing;
///
/// let mut ring = EvictionRing::new(2);
/// assert_eq!(ring.pop_if_full_then_push("a"), None);
/// assert_eq!(ring.pop_if_full_then_push("b"), None);
///
/// // Full: the oldest key makes room for the new one.
/// assert_eq!(ring.pop_if_full_then_push("c"), Some("a"));
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct EvictionRing<K> {
    slots: Vec<Option<K>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<K> EvictionRing<K> {
    /// Creates a ring holding at most `capacity` keys.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// user-supplied capacities.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(ring) => ring,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a ring holding at most `capacity` keys.
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// ```
    /// use lampstamp::ds::EvictionRing;
    ///
    /// assert!(EvictionRing::<u32>::try_new(0).is_err());
    /// assert_eq!(EvictionRing::<u32>::try_new(8).unwrap().capacity(), 8);
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("eviction ring capacity must be greater than zero"));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Returns the fixed slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of tracked keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Records `key` as the most recently admitted entry.
    ///
    /// When the ring is full the oldest key is overwritten and dropped.
    pub fn push(&mut self, key: K) {
        if self.is_full() {
            self.slots[self.head] = None;
            self.head = self.advance(self.head);
            self.len -= 1;
        }
        self.slots[self.tail] = Some(key);
        self.tail = self.advance(self.tail);
        self.len += 1;
    }

    /// Pushes `key`, first removing and returning the oldest key if the ring
    /// is full.
    ///
    /// `None` means nothing had to be evicted. A `Some` result must be acted
    /// on by the caller: the returned key is no longer tracked.
    pub fn pop_if_full_then_push(&mut self, key: K) -> Option<K> {
        let evicted = if self.is_full() { self.pop() } else { None };
        self.push(key);
        evicted
    }

    /// Removes and returns the oldest key, or `None` if the ring is empty.
    pub fn pop(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        let key = self.slots[self.head].take();
        self.head = self.advance(self.head);
        self.len -= 1;
        key
    }

    /// Returns the oldest key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Iterates tracked keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % cap].as_ref())
    }

    /// Drops every tracked key; capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    #[inline]
    fn advance(&self, pos: usize) -> usize {
        if pos + 1 == self.capacity() { 0 } else { pos + 1 }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let cap = self.capacity();
        assert!(cap > 0);
        assert!(self.head < cap);
        assert!(self.tail < cap);
        assert!(self.len <= cap);
        assert_eq!((self.head + self.len) % cap, self.tail);

        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len);
        for offset in 0..self.len {
            assert!(self.slots[(self.head + offset) % cap].is_some());
        }
    }
}
