//! CampusRank LLM Integration
//!
//! Text generation is used in two places:
//! - Data estimation: when authoritative metrics for a college are missing,
//!   the model is asked for numeric estimates
//! - Article prose: introductions, summaries and conclusions for rendered
//!   rankings
//!
//! Callers always treat a failed generation as "no text" and fall back, so
//! every error here is recoverable.

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{MockProvider, OpenAIProvider};

pub mod client;
pub mod error;
pub mod provider;
