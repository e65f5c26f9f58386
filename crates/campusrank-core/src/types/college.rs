//! College profiles and scored colleges

use super::criterion::{CriterionKey, MetricKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metrics gathered for one institution
///
/// Every metric is optional. Percentages are stored in the 0-100 range and
/// currency values in whole US dollars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollegeProfile {
    /// Institution display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_state_tuition: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of_state_tuition: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_earnings: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_debt: Option<f64>,

    /// Additional numeric attributes keyed by snake_case name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, f64>,
}

impl CollegeProfile {
    /// Create a profile with no metrics
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get a metric value
    pub fn metric(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::Enrollment => self.enrollment,
            MetricKey::AdmissionRate => self.admission_rate,
            MetricKey::InStateTuition => self.in_state_tuition,
            MetricKey::OutOfStateTuition => self.out_of_state_tuition,
            MetricKey::RetentionRate => self.retention_rate,
            MetricKey::GraduationRate => self.graduation_rate,
            MetricKey::MedianEarnings => self.median_earnings,
            MetricKey::MedianDebt => self.median_debt,
        }
    }

    /// Set (or clear) a metric value
    pub fn set_metric(&mut self, key: MetricKey, value: Option<f64>) {
        let slot = match key {
            MetricKey::Enrollment => &mut self.enrollment,
            MetricKey::AdmissionRate => &mut self.admission_rate,
            MetricKey::InStateTuition => &mut self.in_state_tuition,
            MetricKey::OutOfStateTuition => &mut self.out_of_state_tuition,
            MetricKey::RetentionRate => &mut self.retention_rate,
            MetricKey::GraduationRate => &mut self.graduation_rate,
            MetricKey::MedianEarnings => &mut self.median_earnings,
            MetricKey::MedianDebt => &mut self.median_debt,
        };
        *slot = value;
    }

    /// Set a metric value
    pub fn with_metric(mut self, key: MetricKey, value: f64) -> Self {
        self.set_metric(key, Some(value));
        self
    }

    /// Set an additional attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: f64) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Value the profile carries for a criterion key, if any
    pub fn attribute(&self, key: &CriterionKey) -> Option<f64> {
        match key {
            CriterionKey::Metric(metric) => self.metric(*metric),
            CriterionKey::Unrecognized(name) => self.extra.get(name).copied(),
        }
    }

    /// Number of known metrics that have a value
    pub fn metric_count(&self) -> usize {
        MetricKey::ALL
            .iter()
            .filter(|key| self.metric(**key).is_some())
            .count()
    }
}

/// A college profile with its composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCollege {
    #[serde(flatten)]
    pub profile: CollegeProfile,

    /// Composite score in 0-100
    pub score: f64,
}

impl ScoredCollege {
    pub fn new(profile: CollegeProfile, score: f64) -> Self {
        Self { profile, score }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}
