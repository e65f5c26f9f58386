//! College Scorecard metrics source

use async_trait::async_trait;
use campusrank_core::{CollegeProfile, MetricKey};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

use super::MetricsSource;
use crate::error::{Result, RuntimeError};

const DEFAULT_BASE_URL: &str = "https://api.data.gov/ed/collegescorecard/v1";

const NAME_FIELD: &str = "school.name";

/// Scorecard field, target metric, and multiplier applied to the raw value
const FIELD_MAP: [(&str, MetricKey, f64); 8] = [
    ("2018.student.size", MetricKey::Enrollment, 1.0),
    (
        "2018.admissions.admission_rate.overall",
        MetricKey::AdmissionRate,
        100.0,
    ),
    (
        "2018.cost.tuition.out_of_state",
        MetricKey::OutOfStateTuition,
        1.0,
    ),
    ("2018.cost.tuition.in_state", MetricKey::InStateTuition, 1.0),
    (
        "2018.student.retention_rate.four_year.full_time",
        MetricKey::RetentionRate,
        100.0,
    ),
    (
        "2018.completion.rate_suppressed.overall",
        MetricKey::GraduationRate,
        100.0,
    ),
    (
        "2018.aid.median_debt.completers.overall",
        MetricKey::MedianDebt,
        1.0,
    ),
    (
        "2018.earnings.6_yrs_after_entry.median",
        MetricKey::MedianEarnings,
        1.0,
    ),
];

/// Comma-separated `fields` parameter sent with every lookup
pub const SCORECARD_FIELDS: &str = "school.name,2018.student.size,\
2018.admissions.admission_rate.overall,2018.cost.tuition.out_of_state,\
2018.cost.tuition.in_state,2018.student.retention_rate.four_year.full_time,\
2018.completion.rate_suppressed.overall,2018.aid.median_debt.completers.overall,\
2018.earnings.6_yrs_after_entry.median";

/// Build a profile from one Scorecard result record
///
/// Null or non-numeric fields are left absent. The three rate fields arrive
/// as fractions and are scaled to percentages. `fallback_name` is used when
/// the record has no `school.name`.
pub fn profile_from_scorecard(record: &Map<String, Value>, fallback_name: &str) -> CollegeProfile {
    let name = record
        .get(NAME_FIELD)
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(fallback_name);

    let mut profile = CollegeProfile::new(name);
    for (field, key, multiplier) in FIELD_MAP {
        let value = record
            .get(field)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
            .map(|v| v * multiplier);
        profile.set_metric(key, value);
    }
    profile
}

/// Authoritative metrics from the U.S. Department of Education College Scorecard
pub struct CollegeScorecardSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CollegeScorecardSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });
        self
    }
}

#[async_trait]
impl MetricsSource for CollegeScorecardSource {
    async fn lookup(&self, name: &str) -> Result<Option<CollegeProfile>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| RuntimeError::CredentialMissing("College Scorecard".to_string()))?;

        tracing::debug!(college = %name, "Querying College Scorecard");

        let response = self
            .client
            .get(format!("{}/schools.json", self.base_url))
            .query(&[
                ("school.name", name),
                ("api_key", api_key),
                ("fields", SCORECARD_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RuntimeError::TransportFailure(format!(
                "College Scorecard returned status {}",
                status
            )));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        let results = body
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                RuntimeError::MalformedResponse("missing 'results' array".to_string())
            })?;

        match results.first() {
            None => Ok(None),
            Some(Value::Object(record)) => Ok(Some(profile_from_scorecard(record, name))),
            Some(_) => Err(RuntimeError::MalformedResponse(
                "result record is not an object".to_string(),
            )),
        }
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn name(&self) -> &str {
        "college_scorecard"
    }
}
