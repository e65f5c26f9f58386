//! Core trait definitions for the repository pattern
//!
//! - [`RankingTypeRepository`]: read-only access to stored ranking types
//! - [`WritableRankingTypeRepository`]: replacing the stored set
//!
//! # Example
//!
//! ```no_run
//! use campusrank_repository::{FileSystemRepository, RankingTypeRepository};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let repo = FileSystemRepository::new("config/ranking_types.yaml")?;
//! let overall = repo.load_ranking_type("Overall").await?;
//! println!("{} criteria", overall.criteria.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use campusrank_core::RankingType;

use crate::error::{RepositoryError, RepositoryResult};

/// Read access to ranking type definitions
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait RankingTypeRepository: Send + Sync {
    /// Load every stored ranking type, in stored order
    async fn load_ranking_types(&self) -> RepositoryResult<Vec<RankingType>>;

    /// Load a ranking type by its exact (case-sensitive) name
    async fn load_ranking_type(&self, name: &str) -> RepositoryResult<RankingType> {
        self.load_ranking_types()
            .await?
            .into_iter()
            .find(|rt| rt.name == name)
            .ok_or_else(|| RepositoryError::NotFound {
                name: name.to_string(),
            })
    }
}

/// Write access to ranking type definitions
#[async_trait]
pub trait WritableRankingTypeRepository: RankingTypeRepository {
    /// Replace the stored set
    ///
    /// Every ranking type is validated before anything is written. When two
    /// entries share a name the later one wins.
    async fn save_ranking_types(&self, ranking_types: &[RankingType]) -> RepositoryResult<()>;
}

/// Validate a submitted set and collapse duplicate names, keeping the last
pub(crate) fn normalize_ranking_types(
    ranking_types: &[RankingType],
) -> RepositoryResult<Vec<RankingType>> {
    let mut normalized: Vec<RankingType> = Vec::with_capacity(ranking_types.len());
    for rt in ranking_types {
        rt.validate()?;
        match normalized.iter_mut().find(|existing| existing.name == rt.name) {
            Some(existing) => *existing = rt.clone(),
            None => normalized.push(rt.clone()),
        }
    }
    Ok(normalized)
}
