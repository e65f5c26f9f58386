//! External data sources
//!
//! Two collaborators feed the resolver:
//! - a **discovery** source that proposes candidate college names for a
//!   category ([`DiscoverySource`], implemented by [`TavilyDiscovery`])
//! - an **authoritative** metrics source that returns verified figures for a
//!   named college ([`MetricsSource`], implemented by [`CollegeScorecardSource`])
//!
//! Both return `Result`: a missing API key, a transport failure and a
//! malformed payload are distinct [`RuntimeError`](crate::RuntimeError)
//! variants, while "nothing found" is an empty list or `Ok(None)`.

use async_trait::async_trait;
use campusrank_core::CollegeProfile;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod discovery;
pub mod scorecard;

pub use discovery::TavilyDiscovery;
pub use scorecard::{profile_from_scorecard, CollegeScorecardSource, SCORECARD_FIELDS};

/// A search for candidate colleges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    /// Natural-language query
    pub query: String,

    /// Domains results must come from
    pub include_domains: Vec<String>,

    /// Upper bound on returned results
    pub max_results: usize,
}

/// Proposes candidate college names
#[async_trait]
pub trait DiscoverySource: Send + Sync {
    /// Run a search and return result titles in rank order
    async fn search(&self, query: &DiscoveryQuery) -> Result<Vec<String>>;

    /// Whether the source has the credentials it needs
    fn is_configured(&self) -> bool {
        true
    }

    fn name(&self) -> &str;
}

/// Returns verified metrics for a named college
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Look a college up by name; `Ok(None)` when nothing matches
    async fn lookup(&self, name: &str) -> Result<Option<CollegeProfile>>;

    /// Whether the source has the credentials it needs
    fn is_configured(&self) -> bool {
        true
    }

    fn name(&self) -> &str;
}
