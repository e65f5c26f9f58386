//! Raw metric values to [0, 1] scores

use campusrank_core::{CriterionKey, MetricKey};

/// Score given to criteria without a known transform
pub const NEUTRAL: f64 = 0.5;

const PERCENT_CAP: f64 = 100.0;
const TUITION_CAP: f64 = 50_000.0;
const ENROLLMENT_CAP: f64 = 50_000.0;
const EARNINGS_CAP: f64 = 100_000.0;
const DEBT_CAP: f64 = 100_000.0;

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Maps a criterion value onto [0, 1], higher meaning better
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricNormalizer;

impl MetricNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a value for a criterion
    ///
    /// Values are clamped into `[0, cap]` before scaling, so the result is
    /// always within [0, 1]. Unrecognized criteria get [`NEUTRAL`]
    /// regardless of the value. Returns `None` for a non-finite value, which
    /// callers treat like an absent one.
    pub fn normalize(&self, key: &CriterionKey, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let metric = match key.metric() {
            Some(metric) => metric,
            None => return Some(NEUTRAL),
        };

        let (cap, direction) = Self::transform(metric);
        let scaled = value.clamp(0.0, cap) / cap;
        Some(match direction {
            Direction::HigherIsBetter => scaled,
            Direction::LowerIsBetter => 1.0 - scaled,
        })
    }

    fn transform(metric: MetricKey) -> (f64, Direction) {
        match metric {
            MetricKey::AdmissionRate => (PERCENT_CAP, Direction::LowerIsBetter),
            MetricKey::RetentionRate | MetricKey::GraduationRate => {
                (PERCENT_CAP, Direction::HigherIsBetter)
            }
            MetricKey::MedianEarnings => (EARNINGS_CAP, Direction::HigherIsBetter),
            MetricKey::InStateTuition | MetricKey::OutOfStateTuition => {
                (TUITION_CAP, Direction::LowerIsBetter)
            }
            MetricKey::Enrollment => (ENROLLMENT_CAP, Direction::HigherIsBetter),
            MetricKey::MedianDebt => (DEBT_CAP, Direction::LowerIsBetter),
        }
    }
}
