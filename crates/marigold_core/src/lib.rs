//! # MARIGOLD Core
//!
//! Span bookkeeping for the MARIGOLD raycaster:
//! - [`IntervalSet`]: a fixed-capacity sorted set of disjoint inclusive
//!   intervals that merges overlapping or touching spans on insert
//! - [`ScanCoverage`]: per-scan tracking of which surface columns have
//!   been drawn, built on an [`IntervalSet`]
//!
//! ## Architecture Rules
//!
//! 1. **Memory is reserved up front** - sets never grow after creation
//! 2. **Invariants hold after every call** - entries stay sorted and disjoint
//! 3. **Failures leave state untouched** - a rejected insert changes nothing
//!
//! ## Example
//!
//! ```rust
//! use marigold_core::{ScanConfig, ScanCoverage};
//!
//! let mut scan = ScanCoverage::new(ScanConfig::default())?;
//! scan.mark(0, 99)?;
//! scan.mark(100, 319)?;
//! assert!(scan.is_complete());
//! # Ok::<(), marigold_core::LimitsError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod coverage;
pub mod error;
pub mod limits;

pub use config::ScanConfig;
pub use coverage::{ScanCoverage, ScanStats};
pub use error::{LimitsError, LimitsResult};
pub use limits::{Coordinate, Gaps, Interval, IntervalSet};
