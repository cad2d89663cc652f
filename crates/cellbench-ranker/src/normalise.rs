//! Score normalisation functions.
//!
//! Bounded metrics use min-max scaling over their declared range. Unbounded
//! metrics are divided by a soft cap and saturate at 1. Lower-is-better
//! metrics are inverted last, so every score reads "1 = best".

use tracing::warn;

use cellbench_common::{BetterDirection, Metric, MetricRange};

/// Divisor applied to metrics with no declared upper bound.
pub const DEFAULT_UNBOUNDED_SOFT_CAP: f64 = 100.0;

/// Min-max normalisation within `[min_val, max_val]`, clamped to `[0, 1]`.
/// A degenerate range (`max_val <= min_val`) maps every value to 0.5.
pub fn minmax_normalise(value: f64, min_val: f64, max_val: f64) -> f64 {
    if max_val - min_val < 1e-10 {
        return 0.5; // degenerate case
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

/// Soft-cap normalisation for unbounded metrics: `value / cap`, clamped to `[0, 1]`.
pub fn soft_cap_normalise(value: f64, cap: f64) -> f64 {
    (value / cap).clamp(0.0, 1.0)
}

/// Apply metric polarity to a raw `[0, 1]` position.
pub fn orient(raw: f64, direction: BetterDirection) -> f64 {
    match direction {
        BetterDirection::Higher => raw,
        BetterDirection::Lower => 1.0 - raw,
    }
}

/// Maps raw benchmark values onto `[0, 1]`, 1 being best.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreNormaliser {
    soft_cap: f64,
}

impl Default for ScoreNormaliser {
    fn default() -> Self {
        Self {
            soft_cap: DEFAULT_UNBOUNDED_SOFT_CAP,
        }
    }
}

impl ScoreNormaliser {
    /// A normaliser with a custom soft cap. Non-finite or non-positive caps
    /// fall back to [`DEFAULT_UNBOUNDED_SOFT_CAP`].
    pub fn with_soft_cap(soft_cap: f64) -> Self {
        if soft_cap.is_finite() && soft_cap > 0.0 {
            Self { soft_cap }
        } else {
            warn!(soft_cap, "Invalid unbounded soft cap, using default");
            Self::default()
        }
    }

    pub fn soft_cap(&self) -> f64 {
        self.soft_cap
    }

    /// Position of `value` within `range` before polarity is applied.
    pub fn raw(&self, value: f64, range: &MetricRange) -> f64 {
        let raw = match range.max {
            Some(max) => minmax_normalise(value, range.min, max),
            None => soft_cap_normalise(value, self.soft_cap),
        };
        if raw.is_nan() {
            0.0
        } else {
            raw
        }
    }

    /// Normalised score for a value under an explicit range and direction.
    ///
    /// A NaN value scores 0, the worst possible score, whatever the direction.
    pub fn score_with(&self, value: f64, range: &MetricRange, direction: BetterDirection) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        orient(self.raw(value, range), direction)
    }

    pub fn score(&self, value: f64, metric: &Metric) -> f64 {
        self.score_with(value, &metric.range, metric.better_direction)
    }

    /// Score for a possibly absent value. Absent stays absent.
    pub fn score_opt(&self, value: Option<f64>, metric: &Metric) -> Option<f64> {
        value.map(|v| self.score(v, metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbench_test_utils::{assert_close, metric};

    #[test]
    fn test_minmax_normalise_clamps() {
        assert_close(minmax_normalise(0.5, 0.0, 1.0), 0.5);
        assert_close(minmax_normalise(0.0, -1.0, 1.0), 0.5);
        assert_close(minmax_normalise(2.0, 0.0, 1.0), 1.0);
        assert_close(minmax_normalise(-3.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_degenerate_range_is_midpoint() {
        assert_close(minmax_normalise(7.0, 1.0, 1.0), 0.5);
        assert_close(minmax_normalise(7.0, 2.0, 1.0), 0.5);
    }

    #[test]
    fn test_polarity_endpoints() {
        let n = ScoreNormaliser::default();
        let unit = MetricRange::bounded(0.0, 1.0);
        assert_close(n.score_with(0.0, &unit, BetterDirection::Higher), 0.0);
        assert_close(n.score_with(1.0, &unit, BetterDirection::Higher), 1.0);
        assert_close(n.score_with(0.0, &unit, BetterDirection::Lower), 1.0);
        assert_close(n.score_with(1.0, &unit, BetterDirection::Lower), 0.0);
    }

    #[test]
    fn test_nmi_scenario() {
        let nmi = metric("nmi", MetricRange::bounded(0.0, 1.0), BetterDirection::Higher);
        assert_close(ScoreNormaliser::default().score(0.75, &nmi), 0.75);
    }

    #[test]
    fn test_davies_bouldin_scenario() {
        let dav = metric("dav", MetricRange::unbounded(0.0), BetterDirection::Lower);
        let n = ScoreNormaliser::default();
        assert_close(n.raw(5.0, &dav.range), 0.05);
        assert_close(n.score(5.0, &dav), 0.95);
    }

    #[test]
    fn test_unbounded_saturates_and_floors() {
        let cal = metric("cal", MetricRange::unbounded(0.0), BetterDirection::Higher);
        let n = ScoreNormaliser::default();
        assert_close(n.score(2015.81, &cal), 1.0);
        assert_close(n.score(-4.0, &cal), 0.0);
    }

    #[test]
    fn test_custom_soft_cap() {
        let time = metric("training_time", MetricRange::unbounded(0.0), BetterDirection::Lower);
        let n = ScoreNormaliser::with_soft_cap(1000.0);
        assert_close(n.score(250.0, &time), 0.75);
        assert_close(ScoreNormaliser::with_soft_cap(0.0).soft_cap(), DEFAULT_UNBOUNDED_SOFT_CAP);
        assert_close(
            ScoreNormaliser::with_soft_cap(f64::NAN).soft_cap(),
            DEFAULT_UNBOUNDED_SOFT_CAP,
        );
    }

    #[test]
    fn test_nan_scores_worst_in_both_directions() {
        let n = ScoreNormaliser::default();
        let unit = MetricRange::bounded(0.0, 1.0);
        assert_close(n.score_with(f64::NAN, &unit, BetterDirection::Higher), 0.0);
        assert_close(n.score_with(f64::NAN, &unit, BetterDirection::Lower), 0.0);
    }

    #[test]
    fn test_absent_stays_absent() {
        let nmi = metric("nmi", MetricRange::bounded(0.0, 1.0), BetterDirection::Higher);
        assert_eq!(ScoreNormaliser::default().score_opt(None, &nmi), None);
    }
}
