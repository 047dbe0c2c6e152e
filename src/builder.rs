//! Builder for [`BoundedClockTable`].
//!
//! Collects table configuration in one place so callers that read capacity
//! from their own configuration can validate it with [`try_build`].
//!
//! ## Example
//!
//! ```rust
//! use lampstamp::builder::ClockTableBuilder;
//!
//! let table = ClockTableBuilder::new(1024).preallocate(true).build::<String>();
//! assert_eq!(table.capacity(), 1024);
//! assert_eq!(table.increment("order-17"), 1);
//!
//! assert!(ClockTableBuilder::new(0).try_build::<String>().is_err());
//! ```
//!
//! [`try_build`]: ClockTableBuilder::try_build

use std::hash::Hash;

use crate::error::ConfigError;
use crate::table::{BoundedClockTable, DEFAULT_CAPACITY};

/// Configuration for a [`BoundedClockTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTableBuilder {
    capacity: usize,
    preallocate: bool,
}

impl ClockTableBuilder {
    /// Starts a builder for a table holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            preallocate: false,
        }
    }

    /// Sets the maximum number of resident keys.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reserves room for `capacity` clocks up front instead of growing the
    /// map on demand.
    pub fn preallocate(mut self, preallocate: bool) -> Self {
        self.preallocate = preallocate;
        self
    }

    /// Builds the table, rejecting a zero capacity.
    pub fn try_build<K>(self) -> Result<BoundedClockTable<K>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        BoundedClockTable::with_options(self.capacity, self.preallocate)
    }

    /// Builds the table.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero.
    pub fn build<K>(self) -> BoundedClockTable<K>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Default for ClockTableBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_uses_default_capacity() {
        let table = ClockTableBuilder::default().build::<String>();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn capacity_setter_overrides() {
        let builder = ClockTableBuilder::default().capacity(3).preallocate(true);
        let table = builder.build::<u32>();
        assert_eq!(table.capacity(), 3);
        for k in 0..10u32 {
            table.increment(&k);
        }
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn try_build_rejects_zero_capacity() {
        let err = ClockTableBuilder::new(0).try_build::<String>().unwrap_err();
        assert!(err.message().contains("greater than zero"));
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn build_panics_on_zero_capacity() {
        let _ = ClockTableBuilder::new(0).build::<String>();
    }
}
