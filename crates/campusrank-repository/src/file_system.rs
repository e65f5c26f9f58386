//! File system based repository implementation

use async_trait::async_trait;
use campusrank_core::RankingType;
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::{normalize_ranking_types, RankingTypeRepository, WritableRankingTypeRepository};

/// On-disk document shape
#[derive(Debug, Default, Serialize, Deserialize)]
struct RankingTypesDocument {
    #[serde(default)]
    ranking_types: Vec<RankingType>,
}

/// File system based repository
///
/// Stores all ranking types in one YAML file:
///
/// ```yaml
/// ranking_types:
///   - name: Overall
///     criteria:
///       - Admission Rate
///       - Graduation Rate
/// ```
///
/// A missing file reads as [`RankingType::defaults`].
pub struct FileSystemRepository {
    /// Absolute path of the YAML file
    path: PathBuf,
    /// Serializes writers
    write_lock: Mutex<()>,
}

impl FileSystemRepository {
    /// Create a new file system repository
    ///
    /// # Arguments
    /// * `path` - Path of the ranking types YAML file. The file itself may
    ///   not exist yet, but its parent directory must.
    pub fn new<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        if let Some(parent) = abs_path.parent() {
            if !parent.exists() {
                return Err(RepositoryError::InvalidPath {
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(Self {
            path: abs_path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RankingTypeRepository for FileSystemRepository {
    async fn load_ranking_types(&self) -> RepositoryResult<Vec<RankingType>> {
        if !self.path.exists() {
            tracing::debug!(
                path = %self.path.display(),
                "Ranking types file not found, using defaults"
            );
            return Ok(RankingType::defaults());
        }

        let content = fs::read_to_string(&self.path).await?;
        let doc: RankingTypesDocument = serde_yaml::from_str(&content)?;
        let ranking_types = normalize_ranking_types(&doc.ranking_types)?;

        tracing::debug!(
            path = %self.path.display(),
            count = ranking_types.len(),
            "Loaded ranking types"
        );
        Ok(ranking_types)
    }
}

#[async_trait]
impl WritableRankingTypeRepository for FileSystemRepository {
    async fn save_ranking_types(&self, ranking_types: &[RankingType]) -> RepositoryResult<()> {
        let ranking_types = normalize_ranking_types(ranking_types)?;
        let content = serde_yaml::to_string(&RankingTypesDocument { ranking_types })?;

        let _guard = self.write_lock.lock().await;
        let tmp_path = self.path.with_extension("yaml.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;

        tracing::info!(path = %self.path.display(), "Saved ranking types");
        Ok(())
    }
}
