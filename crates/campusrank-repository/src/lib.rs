//! Ranking type storage for CampusRank
//!
//! Ranking types are administrator-defined methodologies: a unique name and
//! an ordered list of criteria. This crate stores them and hands out
//! read-only snapshots for ranking runs.
//!
//! # Backends
//!
//! - **File System Repository**: one YAML file on disk
//! - **In-Memory Repository**: for tests and embedded use
//!
//! # Quick Start
//!
//! ```no_run
//! use campusrank_repository::{FileSystemRepository, RankingTypeRegistry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = FileSystemRepository::new("config/ranking_types.yaml")?;
//!     let registry = RankingTypeRegistry::load(&repo).await?;
//!
//!     for name in registry.names() {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file_system;
pub mod memory;
pub mod registry;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemRepository;
pub use memory::InMemoryRepository;
pub use registry::RankingTypeRegistry;
pub use traits::{RankingTypeRepository, WritableRankingTypeRepository};
