//! Composite scoring
//!
//! [`MetricNormalizer`] maps each raw value onto [0, 1] and
//! [`ScoreCalculator`] weighs the normalized values of a ranking type's
//! criteria into a score out of 100.

pub mod calculator;
pub mod normalizer;

pub use calculator::{CriterionContribution, ScoreBreakdown, ScoreCalculator, MAX_SCORE};
pub use normalizer::{MetricNormalizer, NEUTRAL};
