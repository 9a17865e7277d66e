//! Column coverage for a single scan of the render surface.
//!
//! Each scan marks the column spans it has drawn. Spans are clipped to the
//! surface and merged, so after a scan the caller can ask which columns are
//! still open.

use crate::config::ScanConfig;
use crate::error::{LimitsError, LimitsResult};
use crate::limits::{Gaps, IntervalSet};

/// Statistics for the current scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Spans accepted into the set.
    pub spans_marked: u32,
    /// Accepted spans that had to be trimmed to the surface.
    pub spans_clipped: u32,
    /// Spans entirely off the surface, ignored.
    pub spans_offscreen: u32,
    /// Spans rejected because the set was full.
    pub spans_rejected: u32,
}

/// Tracks which columns `[0, surface_width - 1]` have been covered this scan.
#[derive(Debug, Clone)]
pub struct ScanCoverage {
    /// Configuration.
    config: ScanConfig,
    /// Covered column spans.
    spans: IntervalSet<i32>,
    /// Statistics since the last [`next_scan`](Self::next_scan).
    stats: ScanStats,
}

impl ScanCoverage {
    /// Creates coverage tracking for the configured surface.
    ///
    /// # Errors
    ///
    /// * [`LimitsError::InvalidConfig`] if the configuration is unusable.
    /// * [`LimitsError::AllocationFailed`] if the span set cannot be reserved.
    pub fn new(config: ScanConfig) -> LimitsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            spans: IntervalSet::new(config.max_spans)?,
            stats: ScanStats::default(),
        })
    }

    /// The configuration this tracker was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Rightmost column on the surface.
    #[inline]
    #[must_use]
    pub fn last_column(&self) -> i32 {
        i32::from(self.config.surface_width) - 1
    }

    /// Marks columns `[start, end]` as covered.
    ///
    /// The span is clipped to the surface first. Returns `Ok(false)` if
    /// nothing of it lies on the surface.
    ///
    /// # Errors
    ///
    /// * [`LimitsError::InvalidInterval`] if `start > end`.
    /// * [`LimitsError::CapacityExceeded`] if the span set is full. Coverage
    ///   is unchanged.
    pub fn mark(&mut self, start: i32, end: i32) -> LimitsResult<bool> {
        if start > end {
            return Err(LimitsError::InvalidInterval {
                start: start.into(),
                end: end.into(),
            });
        }

        let last = self.last_column();
        if end < 0 || start > last {
            self.stats.spans_offscreen = self.stats.spans_offscreen.saturating_add(1);
            return Ok(false);
        }

        let clipped_start = start.max(0);
        let clipped_end = end.min(last);

        match self.spans.insert(clipped_start, clipped_end) {
            Ok(()) => {
                self.stats.spans_marked = self.stats.spans_marked.saturating_add(1);
                if clipped_start != start || clipped_end != end {
                    self.stats.spans_clipped = self.stats.spans_clipped.saturating_add(1);
                }
                Ok(true)
            }
            Err(e) => {
                if matches!(e, LimitsError::CapacityExceeded { .. }) {
                    self.stats.spans_rejected = self.stats.spans_rejected.saturating_add(1);
                }
                Err(e)
            }
        }
    }

    /// Whether `column` has been covered.
    #[inline]
    #[must_use]
    pub fn is_column_covered(&self, column: i32) -> bool {
        self.spans.contains(column)
    }

    /// Whether every column on the surface has been covered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.spans.covers(0, self.last_column())
    }

    /// Number of covered columns.
    #[must_use]
    pub fn columns_covered(&self) -> u64 {
        self.spans.covered_len()
    }

    /// Column spans not yet covered, left to right.
    pub fn uncovered(&self) -> Gaps<'_, i32> {
        self.spans.gaps(0, self.last_column())
    }

    /// The covered spans.
    #[inline]
    #[must_use]
    pub const fn spans(&self) -> &IntervalSet<i32> {
        &self.spans
    }

    /// Statistics since the last [`next_scan`](Self::next_scan).
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Clears coverage and statistics for a new scan.
    pub fn next_scan(&mut self) {
        self.spans.reset();
        self.stats = ScanStats::default();
    }
}
