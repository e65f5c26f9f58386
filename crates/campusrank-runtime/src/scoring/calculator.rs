//! Composite scores under a ranking type

use campusrank_core::{CollegeProfile, CriterionKey};
use campusrank_repository::RankingTypeRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::normalizer::MetricNormalizer;

/// Upper bound of a composite score
pub const MAX_SCORE: f64 = 100.0;

/// One criterion's share of a composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    /// Criterion display name
    pub criterion: String,

    /// Derived lookup key
    pub key: String,

    /// Raw value, when the profile has one
    pub value: Option<f64>,

    /// Normalized value in [0, 1], when it counted
    pub normalized: Option<f64>,

    /// Points added to the total
    pub points: f64,
}

/// A composite score with its per-criterion parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ranking_type: String,
    pub weight_per_criterion: f64,
    pub total: f64,
    pub contributions: Vec<CriterionContribution>,
}

/// Scores college profiles against the ranking types of a registry snapshot
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    registry: Arc<RankingTypeRegistry>,
    normalizer: MetricNormalizer,
}

impl ScoreCalculator {
    pub fn new(registry: Arc<RankingTypeRegistry>) -> Self {
        Self {
            registry,
            normalizer: MetricNormalizer::new(),
        }
    }

    pub fn registry(&self) -> &Arc<RankingTypeRegistry> {
        &self.registry
    }

    /// Composite score in [0, 100]
    ///
    /// Each criterion carries `100 / criteria count` points scaled by its
    /// normalized value. Criteria the profile has no value for add nothing and
    /// the remaining weights are not rescaled. An unknown ranking type scores 0.
    pub fn score(&self, profile: &CollegeProfile, ranking_type: &str) -> f64 {
        match self.breakdown(profile, ranking_type) {
            Some(breakdown) => breakdown.total,
            None => {
                tracing::warn!(
                    ranking_type = %ranking_type,
                    college = %profile.name,
                    "Ranking type not found, scoring 0"
                );
                0.0
            }
        }
    }

    /// Per-criterion breakdown, or `None` for an unknown ranking type
    pub fn breakdown(&self, profile: &CollegeProfile, ranking_type: &str) -> Option<ScoreBreakdown> {
        let rt = self.registry.get(ranking_type)?;
        let weight = rt.weight_per_criterion();

        let contributions: Vec<CriterionContribution> = rt
            .criterion_keys()
            .map(|(criterion, key)| self.contribution(profile, criterion, &key, weight))
            .collect();

        let total = contributions
            .iter()
            .map(|c| c.points)
            .sum::<f64>()
            .clamp(0.0, MAX_SCORE);

        Some(ScoreBreakdown {
            ranking_type: rt.name.clone(),
            weight_per_criterion: weight,
            total,
            contributions,
        })
    }

    fn contribution(
        &self,
        profile: &CollegeProfile,
        criterion: &str,
        key: &CriterionKey,
        weight: f64,
    ) -> CriterionContribution {
        let value = profile.attribute(key);
        let normalized = value.and_then(|v| self.normalizer.normalize(key, v));
        CriterionContribution {
            criterion: criterion.to_string(),
            key: key.as_str().to_string(),
            value,
            normalized,
            points: normalized.map(|n| weight * n).unwrap_or(0.0),
        }
    }
}
