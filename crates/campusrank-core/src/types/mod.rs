//! Domain types for CampusRank
//!
//! - [`RankingType`]: a named methodology with an ordered list of criteria
//! - [`CriterionKey`] / [`MetricKey`]: how a criterion display name maps onto
//!   a college metric
//! - [`CollegeProfile`] / [`ScoredCollege`]: per-institution metrics, before
//!   and after scoring
//! - [`RankRequest`] / [`RankingResult`]: pipeline input and output

pub mod college;
pub mod criterion;
pub mod ranking_type;
pub mod request;

pub use college::{CollegeProfile, ScoredCollege};
pub use criterion::{CriterionKey, MetricKey, MetricKind};
pub use ranking_type::RankingType;
pub use request::{RankRequest, RankingResult, MAX_ENTITIES};
