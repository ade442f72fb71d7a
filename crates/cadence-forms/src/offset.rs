//! Min/max offset window for interval controls.
//!
//! Offset fields ("charge 3d before renewal", "remind 1w after") are
//! bounded by a configurable window. Bounds compare by approximate
//! calendar length, so a `1w` minimum rejects `5d` and accepts `1m`.

use std::fmt;

use cadence_duration::Interval;

/// Inclusive min/max bounds for an offset control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetWindow {
    min: Option<Interval>,
    max: Option<Interval>,
}

impl OffsetWindow {
    /// Create an unbounded window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum bound (builder).
    #[must_use]
    pub fn with_min(mut self, min: Interval) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum bound (builder).
    #[must_use]
    pub fn with_max(mut self, max: Interval) -> Self {
        self.max = Some(max);
        self
    }

    /// The minimum bound, if any.
    #[must_use]
    pub fn min(&self) -> Option<Interval> {
        self.min
    }

    /// The maximum bound, if any.
    #[must_use]
    pub fn max(&self) -> Option<Interval> {
        self.max
    }

    /// Check that the bounds are not inverted.
    pub fn validate(&self) -> Result<(), OffsetWindowError> {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min.approx_days() > max.approx_days()
        {
            return Err(OffsetWindowError::InvertedBounds { min, max });
        }
        Ok(())
    }

    /// Pin a candidate interval inside the window.
    ///
    /// Comparison uses approximate calendar length; a candidate outside the
    /// window becomes the violated bound itself.
    #[must_use]
    pub fn clamp(&self, candidate: Interval) -> Interval {
        if let Some(min) = self.min
            && candidate.approx_days() < min.approx_days()
        {
            tracing::warn!(%candidate, %min, "offset below window minimum, clamping");
            return min;
        }
        if let Some(max) = self.max
            && candidate.approx_days() > max.approx_days()
        {
            tracing::warn!(%candidate, %max, "offset above window maximum, clamping");
            return max;
        }
        candidate
    }
}

/// Errors from offset window validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetWindowError {
    /// The minimum bound is longer than the maximum.
    InvertedBounds {
        /// Configured minimum.
        min: Interval,
        /// Configured maximum.
        max: Interval,
    },
}

impl fmt::Display for OffsetWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { min, max } => {
                write!(f, "offset window minimum '{min}' exceeds maximum '{max}'")
            }
        }
    }
}

impl std::error::Error for OffsetWindowError {}
