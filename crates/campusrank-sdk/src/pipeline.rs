//! Resolve, order and truncate

use campusrank_core::{RankRequest, RankingResult, ScoredCollege};
use campusrank_runtime::EntityResolver;

/// Runs one ranking request against a resolver
pub struct RankingPipeline {
    resolver: EntityResolver,
}

impl RankingPipeline {
    pub fn new(resolver: EntityResolver) -> Self {
        Self { resolver }
    }

    /// Produce the ordered ranking for a request
    ///
    /// An empty result is not an error here; the caller decides how to
    /// report it.
    pub async fn run(&self, request: &RankRequest) -> RankingResult {
        tracing::info!(
            category = %request.category,
            ranking_type = %request.ranking_type,
            num_entities = request.num_entities,
            "Running ranking pipeline"
        );

        let colleges = self
            .resolver
            .resolve(&request.category, request.num_entities, &request.ranking_type)
            .await;
        let ranked = order_by_score(colleges, request.num_entities);

        tracing::info!(
            category = %request.category,
            count = ranked.len(),
            "Ranking pipeline finished"
        );
        RankingResult::new(ranked)
    }
}

/// Sort by descending score and keep the first `limit`
///
/// The sort is stable, so equal scores keep their discovery order.
pub fn order_by_score(mut colleges: Vec<ScoredCollege>, limit: usize) -> Vec<ScoredCollege> {
    colleges.sort_by(|a, b| b.score.total_cmp(&a.score));
    colleges.truncate(limit);
    colleges
}
