//! CampusRank Runtime - Data resolution and scoring
//!
//! This crate gathers metrics for candidate colleges and scores them under a
//! ranking type. It talks to three collaborators (candidate discovery,
//! authoritative metrics, text generation) and degrades to smaller results
//! when any of them is unavailable.

pub mod error;
pub mod estimate;
pub mod format;
pub mod inference;
pub mod resolver;
pub mod scoring;
pub mod source;

// Re-export main types
pub use error::{Result, RuntimeError};
pub use estimate::{estimate_prompt, parse_estimates, parse_leading_number, ESTIMATE_FIELD_COUNT};
pub use format::{format_number, format_optional_stat, format_stat, NOT_AVAILABLE};
pub use inference::{TextGenerator, DEFAULT_MODEL, DEFAULT_SUMMARY_LENGTH};
pub use resolver::{is_institution_title, EntityResolver};
pub use scoring::{
    CriterionContribution, MetricNormalizer, ScoreBreakdown, ScoreCalculator, MAX_SCORE, NEUTRAL,
};
pub use source::{
    profile_from_scorecard, CollegeScorecardSource, DiscoveryQuery, DiscoverySource,
    MetricsSource, TavilyDiscovery, SCORECARD_FIELDS,
};
