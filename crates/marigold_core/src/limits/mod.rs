//! # Limits
//!
//! Bounded sets of disjoint integer spans.
//!
//! ## Design Philosophy
//!
//! A set is sized once, when it is created. After that:
//! - No heap allocations on insert
//! - No growth, a full set rejects new spans
//! - Overlapping and touching spans collapse into one

mod gaps;
mod interval;
mod set;

pub use gaps::Gaps;
pub use interval::{Coordinate, Interval};
pub use set::IntervalSet;
