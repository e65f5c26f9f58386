//! Ranking type definitions

use super::criterion::CriterionKey;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A named ranking methodology
///
/// Every criterion carries the same weight (`100 / criteria.len()`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingType {
    /// Unique, case-sensitive name
    pub name: String,

    /// Ordered criteria display names (e.g. "Graduation Rate")
    pub criteria: Vec<String>,
}

impl RankingType {
    /// Create a ranking type, rejecting an empty name or criteria list
    pub fn new(name: impl Into<String>, criteria: Vec<String>) -> Result<Self> {
        let ranking_type = Self {
            name: name.into(),
            criteria,
        };
        ranking_type.validate()?;
        Ok(ranking_type)
    }

    /// Create a ranking type from comma-separated criteria text
    ///
    /// Each criterion is trimmed; blank entries are dropped.
    pub fn from_comma_separated(name: impl Into<String>, criteria: &str) -> Result<Self> {
        let name = name.into();
        let parsed: Vec<String> = criteria
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        log::debug!("Parsed {} criteria for ranking type '{}'", parsed.len(), name);
        Self::new(name.trim().to_string(), parsed)
    }

    /// Check the ranking type invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidRankingType(
                "name must not be empty".to_string(),
            ));
        }
        if self.criteria.is_empty() {
            return Err(CoreError::InvalidRankingType(format!(
                "'{}' must have at least one criterion",
                self.name
            )));
        }
        Ok(())
    }

    /// Weight given to each criterion
    pub fn weight_per_criterion(&self) -> f64 {
        if self.criteria.is_empty() {
            return 0.0;
        }
        100.0 / self.criteria.len() as f64
    }

    /// Criteria paired with their lookup keys, in order
    pub fn criterion_keys(&self) -> impl Iterator<Item = (&str, CriterionKey)> + '_ {
        self.criteria
            .iter()
            .map(|criterion| (criterion.as_str(), CriterionKey::derive(criterion)))
    }

    /// The ranking types a fresh installation starts with
    pub fn defaults() -> Vec<RankingType> {
        let build = |name: &str, criteria: [&str; 4]| RankingType {
            name: name.to_string(),
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
        };
        vec![
            build(
                "Overall",
                [
                    "Admission Rate",
                    "Retention Rate",
                    "Graduation Rate",
                    "Median Earnings",
                ],
            ),
            build(
                "Affordability",
                [
                    "In-State Tuition",
                    "Out-of-State Tuition",
                    "Graduation Rate",
                    "Median Earnings",
                ],
            ),
            build(
                "Online Programs",
                [
                    "Online Programs Offered",
                    "Graduation Rate",
                    "Retention Rate",
                    "Median Earnings",
                ],
            ),
        ]
    }
}
