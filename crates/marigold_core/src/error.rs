//! # Limits Error Types
//!
//! All errors that can occur while building or filling span sets.

use thiserror::Error;

/// Errors that can occur in the limits system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// The backing buffers could not be reserved.
    #[error("allocation failed: could not reserve {capacity} interval slots")]
    AllocationFailed {
        /// The capacity that was requested.
        capacity: usize,
    },

    /// The set is full and the insert was rejected. The set is unchanged.
    #[error("capacity exceeded: set already holds {capacity} intervals")]
    CapacityExceeded {
        /// The fixed capacity of the set.
        capacity: usize,
    },

    /// A set must be able to hold at least one interval.
    #[error("invalid capacity: must be greater than zero")]
    InvalidCapacity,

    /// An interval was given with its start after its end.
    #[error("invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        /// The requested start, widened.
        start: i64,
        /// The requested end, widened.
        end: i64,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for limits operations.
pub type LimitsResult<T> = Result<T, LimitsError>;
