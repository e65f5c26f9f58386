//! CampusRank SDK
//!
//! High-level API for generating college rankings: build a
//! [`RankingEngine`] with [`RankingEngineBuilder`], then submit
//! [`RankRequest`]s. Each request is resolved, scored, ordered and rendered
//! into a [`RankingDocument`].

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod renderer;

// Re-export main types
pub use builder::RankingEngineBuilder;
pub use config::{ApiConfig, EngineConfig, LLMConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use engine::{CredentialStatus, RankingEngine, RankingResponse};
pub use error::{Result, SdkError};
pub use pipeline::{order_by_score, RankingPipeline};
pub use renderer::{escape_html, ContentRenderer, KeyStatistic, RankedEntry, RankingDocument};

// Re-export commonly used types from dependencies
pub use campusrank_core::{CollegeProfile, RankRequest, RankingResult, RankingType, ScoredCollege};
pub use campusrank_runtime::{CriterionContribution, ScoreBreakdown};
