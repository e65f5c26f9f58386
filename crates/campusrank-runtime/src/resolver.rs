//! Candidate discovery and per-college data resolution

use campusrank_core::{CollegeProfile, ScoredCollege};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::estimate::{estimate_prompt, parse_estimates};
use crate::inference::TextGenerator;
use crate::scoring::ScoreCalculator;
use crate::source::{DiscoveryQuery, DiscoverySource, MetricsSource};

/// Words a search result title must contain to count as an institution
const INSTITUTION_MARKERS: [&str; 2] = ["University", "College"];

const DISCOVERY_DOMAIN: &str = "edu";

/// Turns a category into scored colleges
///
/// Candidates come from the discovery source. Each is looked up in the
/// authoritative metrics source and, failing that, estimated through text
/// generation. Collaborator failures are logged and never surface as errors:
/// they shrink the result instead.
pub struct EntityResolver {
    discovery: Arc<dyn DiscoverySource>,
    metrics: Arc<dyn MetricsSource>,
    generator: TextGenerator,
    calculator: ScoreCalculator,
    concurrency: usize,
}

impl EntityResolver {
    pub fn new(
        discovery: Arc<dyn DiscoverySource>,
        metrics: Arc<dyn MetricsSource>,
        generator: TextGenerator,
        calculator: ScoreCalculator,
    ) -> Self {
        Self {
            discovery,
            metrics,
            generator,
            calculator,
            concurrency: 1,
        }
    }

    /// Resolve up to `concurrency` candidates at a time; results keep discovery order
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Resolve and score up to `num_entities` colleges, in discovery order
    pub async fn resolve(
        &self,
        category: &str,
        num_entities: usize,
        ranking_type: &str,
    ) -> Vec<ScoredCollege> {
        let candidates = self.discover(category, num_entities).await;
        if candidates.is_empty() {
            tracing::warn!(category = %category, "No candidate colleges found");
            return Vec::new();
        }

        let resolved: Vec<Option<CollegeProfile>> = stream::iter(candidates)
            .map(move |name| async move { self.resolve_candidate(&name, category).await })
            .buffered(self.concurrency)
            .collect()
            .await;

        let scored: Vec<ScoredCollege> = resolved
            .into_iter()
            .flatten()
            .take(num_entities)
            .map(|profile| {
                let score = self.calculator.score(&profile, ranking_type);
                tracing::debug!(college = %profile.name, score, "Scored college");
                ScoredCollege::new(profile, score)
            })
            .collect();

        if scored.is_empty() {
            tracing::warn!(category = %category, "No college data could be fetched or generated");
        }
        scored
    }

    /// Candidate names for a category, at most `num_entities`
    pub async fn discover(&self, category: &str, num_entities: usize) -> Vec<String> {
        let query = DiscoveryQuery {
            query: format!(
                "top {} colleges for {} in the United States",
                num_entities, category
            ),
            include_domains: vec![DISCOVERY_DOMAIN.to_string()],
            max_results: num_entities.saturating_mul(2),
        };

        let titles = match self.discovery.search(&query).await {
            Ok(titles) => titles,
            Err(e) => {
                tracing::warn!(
                    source = self.discovery.name(),
                    category = %category,
                    error = %e,
                    "Candidate discovery failed"
                );
                return Vec::new();
            }
        };

        titles
            .into_iter()
            .filter(|title| is_institution_title(title))
            .take(num_entities)
            .collect()
    }

    /// Profile for one candidate, or `None` when it has to be dropped
    pub async fn resolve_candidate(&self, name: &str, category: &str) -> Option<CollegeProfile> {
        match self.metrics.lookup(name).await {
            Ok(Some(profile)) => return Some(profile),
            Ok(None) => {
                tracing::info!(college = %name, "No authoritative record, estimating");
            }
            Err(e) => {
                tracing::warn!(
                    source = self.metrics.name(),
                    college = %name,
                    error = %e,
                    "Metrics lookup failed, estimating"
                );
            }
        }

        let response = match self.generator.generate(&estimate_prompt(name, category)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(college = %name, error = %e, "Estimate generation failed, dropping");
                return None;
            }
        };

        match parse_estimates(name, &response) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(college = %name, error = %e, "Unexpected estimate format, dropping");
                None
            }
        }
    }
}

/// Whether a search result title names an institution
pub fn is_institution_title(title: &str) -> bool {
    INSTITUTION_MARKERS
        .iter()
        .any(|marker| title.contains(marker))
}
