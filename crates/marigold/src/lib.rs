//! # MARIGOLD
//!
//! Facade over the MARIGOLD crates. Window, audio and asset handling live
//! with the platform layer; this crate carries the span bookkeeping the
//! renderer relies on.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub use marigold_core::{
    config, coverage, error, limits, Coordinate, Gaps, Interval, IntervalSet, LimitsError,
    LimitsResult, ScanConfig, ScanCoverage, ScanStats,
};

/// Span sequence the probe replays when none is given.
pub const DEMO_SPANS: [(i32, i32); 3] = [(1, 50), (45, 100), (102, 150)];

/// Parses a `start:end` argument.
///
/// # Errors
///
/// [`LimitsError::InvalidConfig`] if the argument is not two integers
/// separated by `:`, or [`LimitsError::InvalidInterval`] if `start > end`.
pub fn parse_span(arg: &str) -> LimitsResult<Interval<i32>> {
    let (start, end) = arg
        .split_once(':')
        .ok_or_else(|| LimitsError::InvalidConfig(format!("expected start:end, got {arg:?}")))?;

    let parse = |text: &str| {
        text.trim()
            .parse::<i32>()
            .map_err(|e| LimitsError::InvalidConfig(format!("bad bound {text:?} in {arg:?}: {e}")))
    };

    Interval::new(parse(start)?, parse(end)?)
}

/// Inserts every span in order, calling `report` after each attempt.
///
/// Rejected spans are reported and skipped. Returns the number rejected.
pub fn replay<F>(set: &mut IntervalSet<i32>, spans: &[Interval<i32>], mut report: F) -> usize
where
    F: FnMut(&Interval<i32>, &LimitsResult<()>, &IntervalSet<i32>),
{
    let mut rejected = 0;
    for span in spans {
        let result = set.insert_interval(*span);
        if result.is_err() {
            rejected += 1;
            tracing::warn!("Span {} rejected", span);
        }
        report(span, &result, set);
    }
    rejected
}
