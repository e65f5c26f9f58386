//! Error types for CampusRank Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid ranking type: {0}")]
    InvalidRankingType(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
