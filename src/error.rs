//! Error types for the lampstamp library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a table or ring is configured with invalid
//!   parameters (zero capacity).
//! - [`InvariantError`]: Returned by [`BoundedClockTable::check_invariants`]
//!   when the counter map and the eviction ring disagree.
//!
//! Neither "nothing to evict" nor "ring is empty" is an error: both are
//! reported as `None` by the ring operations.
//!
//! ## Example Usage
//!
//! ```
//! use lampstamp::error::ConfigError;
//! use lampstamp::table::BoundedClockTable;
//!
//! let table: Result<BoundedClockTable, ConfigError> = BoundedClockTable::try_new(64);
//! assert!(table.is_ok());
//!
//! let bad = BoundedClockTable::<String>::try_new(0);
//! assert!(bad.is_err());
//! ```
//!
//! [`BoundedClockTable::check_invariants`]: crate::table::BoundedClockTable::check_invariants

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal table invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`BoundedClockTable::try_new`](crate::table::BoundedClockTable::try_new)
/// and [`ClockTableBuilder::try_build`](crate::builder::ClockTableBuilder::try_build).
///
/// # Example
///
/// ```
/// use lampstamp::table::BoundedClockTable;
///
/// let err = BoundedClockTable::<String>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
