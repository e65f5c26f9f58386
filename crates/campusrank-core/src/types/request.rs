//! Ranking request and result types

use super::college::ScoredCollege;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Largest number of colleges a single ranking may ask for
pub const MAX_ENTITIES: usize = 50;

/// Input to a ranking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRequest {
    /// Category or focus area (e.g. "Computer Science")
    #[serde(alias = "focus_area")]
    pub category: String,

    /// Name of the ranking type to score with
    pub ranking_type: String,

    /// How many colleges to rank
    pub num_entities: usize,

    /// Methodology text used verbatim instead of the generated paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_methodology: Option<String>,

    /// Article title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RankRequest {
    pub fn new(
        category: impl Into<String>,
        ranking_type: impl Into<String>,
        num_entities: usize,
    ) -> Self {
        Self {
            category: category.into(),
            ranking_type: ranking_type.into(),
            num_entities,
            custom_methodology: None,
            title: None,
        }
    }

    pub fn with_custom_methodology(mut self, text: impl Into<String>) -> Self {
        self.custom_methodology = Some(text.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Custom methodology text, ignoring blank input
    pub fn custom_methodology(&self) -> Option<&str> {
        self.custom_methodology
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Article title, falling back to one derived from the request
    pub fn title(&self) -> String {
        match self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => title.to_string(),
            None => format!(
                "Top {} {} Colleges in {}",
                self.num_entities, self.ranking_type, self.category
            ),
        }
    }

    /// Reject requests the pipeline cannot run
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(CoreError::InvalidRequest(
                "category must not be empty".to_string(),
            ));
        }
        if self.ranking_type.is_empty() {
            return Err(CoreError::InvalidRequest(
                "ranking_type must not be empty".to_string(),
            ));
        }
        if self.num_entities == 0 || self.num_entities > MAX_ENTITIES {
            return Err(CoreError::InvalidRequest(format!(
                "num_entities must be between 1 and {}, got {}",
                MAX_ENTITIES, self.num_entities
            )));
        }
        Ok(())
    }
}

/// Ordered ranking output, best score first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub colleges: Vec<ScoredCollege>,
}

impl RankingResult {
    pub fn new(colleges: Vec<ScoredCollege>) -> Self {
        Self { colleges }
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCollege> {
        self.colleges.iter()
    }
}

impl From<Vec<ScoredCollege>> for RankingResult {
    fn from(colleges: Vec<ScoredCollege>) -> Self {
        Self::new(colleges)
    }
}

impl<'a> IntoIterator for &'a RankingResult {
    type Item = &'a ScoredCollege;
    type IntoIter = std::slice::Iter<'a, ScoredCollege>;

    fn into_iter(self) -> Self::IntoIter {
        self.colleges.iter()
    }
}
