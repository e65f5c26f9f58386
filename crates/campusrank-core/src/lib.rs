//! CampusRank Core - Core types and definitions for CampusRank
//!
//! This crate provides the fundamental types shared by every CampusRank crate:
//! - Ranking types (named methodologies with an ordered criteria list)
//! - Criterion to metric key mapping
//! - College profiles and scored colleges
//! - Ranking requests and results
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    CollegeProfile, CriterionKey, MetricKey, MetricKind, RankRequest, RankingResult, RankingType,
    ScoredCollege, MAX_ENTITIES,
};
