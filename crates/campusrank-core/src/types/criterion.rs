//! Criterion to metric key mapping
//!
//! Ranking types name their criteria with display strings such as
//! `"Graduation Rate"`. Scoring and statistics look values up by a snake_case
//! key derived from that display string. The derivation lives in exactly one
//! place, [`CriterionKey::derive`], so a change in criteria naming never has to
//! be chased through the scoring and rendering code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A metric the data sources know how to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Enrollment,
    AdmissionRate,
    InStateTuition,
    OutOfStateTuition,
    RetentionRate,
    GraduationRate,
    MedianEarnings,
    MedianDebt,
}

/// How a metric's value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Head count
    Count,
    /// Percentage in 0-100
    Percent,
    /// US dollars
    Currency,
}

impl MetricKey {
    /// All metrics, in the order the inference fallback reports them
    pub const ALL: [MetricKey; 8] = [
        MetricKey::Enrollment,
        MetricKey::AdmissionRate,
        MetricKey::InStateTuition,
        MetricKey::OutOfStateTuition,
        MetricKey::RetentionRate,
        MetricKey::GraduationRate,
        MetricKey::MedianEarnings,
        MetricKey::MedianDebt,
    ];

    /// The snake_case lookup key
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Enrollment => "enrollment",
            MetricKey::AdmissionRate => "admission_rate",
            MetricKey::InStateTuition => "in_state_tuition",
            MetricKey::OutOfStateTuition => "out_of_state_tuition",
            MetricKey::RetentionRate => "retention_rate",
            MetricKey::GraduationRate => "graduation_rate",
            MetricKey::MedianEarnings => "median_earnings",
            MetricKey::MedianDebt => "median_debt",
        }
    }

    /// Look up a metric by its snake_case key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.as_str() == key)
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            MetricKey::Enrollment => MetricKind::Count,
            MetricKey::AdmissionRate | MetricKey::RetentionRate | MetricKey::GraduationRate => {
                MetricKind::Percent
            }
            MetricKey::InStateTuition
            | MetricKey::OutOfStateTuition
            | MetricKey::MedianEarnings
            | MetricKey::MedianDebt => MetricKind::Currency,
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup key for one criterion of a ranking type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CriterionKey {
    /// The criterion names a known metric
    Metric(MetricKey),
    /// Any other key; scored with a neutral contribution when the college
    /// carries a value for it
    Unrecognized(String),
}

impl CriterionKey {
    /// Derive the lookup key from a criterion display name.
    ///
    /// The transform is lower-casing followed by replacing every space with an
    /// underscore. Nothing else is normalized, so `"In-State Tuition"` becomes
    /// `in-state_tuition`, which is not a known metric.
    pub fn derive(display_name: &str) -> Self {
        let key = display_name.to_lowercase().replace(' ', "_");
        match MetricKey::from_key(&key) {
            Some(metric) => CriterionKey::Metric(metric),
            None => CriterionKey::Unrecognized(key),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CriterionKey::Metric(metric) => metric.as_str(),
            CriterionKey::Unrecognized(key) => key,
        }
    }

    pub fn metric(&self) -> Option<MetricKey> {
        match self {
            CriterionKey::Metric(metric) => Some(*metric),
            CriterionKey::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
