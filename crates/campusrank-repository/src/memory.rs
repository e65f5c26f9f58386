//! In-memory repository implementation

use async_trait::async_trait;
use campusrank_core::RankingType;
use tokio::sync::RwLock;

use crate::error::RepositoryResult;
use crate::traits::{normalize_ranking_types, RankingTypeRepository, WritableRankingTypeRepository};

/// Repository holding ranking types in memory
pub struct InMemoryRepository {
    ranking_types: RwLock<Vec<RankingType>>,
}

impl InMemoryRepository {
    /// Create a repository seeded with the given ranking types
    pub fn new(ranking_types: Vec<RankingType>) -> Self {
        Self {
            ranking_types: RwLock::new(ranking_types),
        }
    }

    /// Create a repository seeded with [`RankingType::defaults`]
    pub fn with_defaults() -> Self {
        Self::new(RankingType::defaults())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl RankingTypeRepository for InMemoryRepository {
    async fn load_ranking_types(&self) -> RepositoryResult<Vec<RankingType>> {
        Ok(self.ranking_types.read().await.clone())
    }
}

#[async_trait]
impl WritableRankingTypeRepository for InMemoryRepository {
    async fn save_ranking_types(&self, ranking_types: &[RankingType]) -> RepositoryResult<()> {
        let normalized = normalize_ranking_types(ranking_types)?;
        *self.ranking_types.write().await = normalized;
        Ok(())
    }
}
