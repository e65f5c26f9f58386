//! Ranking article rendering
//!
//! A [`RankingDocument`] has four parts in a fixed order: introduction,
//! methodology, the ranked entries and a conclusion. Prose comes from text
//! generation; every generated part has a fixed fallback so a document is
//! always produced.

use campusrank_core::{RankingResult, ScoredCollege};
use campusrank_repository::RankingTypeRegistry;
use campusrank_runtime::{format_optional_stat, TextGenerator};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::Arc;

/// One line of an entry's key statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStatistic {
    /// Criterion display name
    pub label: String,
    /// Formatted value, `N/A` when absent
    pub value: String,
}

/// One ranked college in the article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub summary: String,
    pub statistics: Vec<KeyStatistic>,
}

impl RankedEntry {
    /// Entry heading, e.g. `1. Example University`
    pub fn heading(&self) -> String {
        format!("{}. {}", self.rank, self.name)
    }

    /// Score line, e.g. `87.25 out of 100`
    pub fn score_text(&self) -> String {
        format!("{:.2} out of 100", self.score)
    }
}

/// A rendered ranking article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingDocument {
    pub introduction: String,
    pub methodology: String,
    /// Heading of the ranking section
    pub heading: String,
    pub entries: Vec<RankedEntry>,
    pub conclusion: String,
}

impl RankingDocument {
    /// Render the article body as HTML
    ///
    /// College names are escaped. Generated prose and methodology text are
    /// inserted as-is.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        let _ = write!(html, "<h2>Introduction</h2>\n\n<p>{}</p>\n\n", self.introduction);
        let _ = write!(html, "<h2>Methodology</h2>\n\n<p>{}</p>\n\n", self.methodology);
        let _ = write!(html, "<h2>{}</h2>\n\n", self.heading);

        for entry in &self.entries {
            let _ = writeln!(html, "<h3>{}. {}</h3>", entry.rank, escape_html(&entry.name));
            let _ = writeln!(
                html,
                "<p><strong>Overall Score:</strong> {}</p>",
                entry.score_text()
            );
            let _ = writeln!(html, "<p>{}</p>", entry.summary);
            html.push_str("<h4>Key Statistics:</h4>\n<ul>\n");
            for stat in &entry.statistics {
                let _ = writeln!(html, "<li><strong>{}:</strong> {}</li>", stat.label, stat.value);
            }
            html.push_str("</ul>\n");
        }

        let _ = write!(html, "<h2>Conclusion</h2>\n\n<p>{}</p>\n\n", self.conclusion);
        html
    }
}

/// Escape the five HTML special characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Builds ranking articles
pub struct ContentRenderer {
    generator: TextGenerator,
    registry: Arc<RankingTypeRegistry>,
}

impl ContentRenderer {
    pub fn new(generator: TextGenerator, registry: Arc<RankingTypeRegistry>) -> Self {
        Self {
            generator,
            registry,
        }
    }

    /// Render a ranking result
    ///
    /// Generation failures fall back to fixed text. An unknown ranking type
    /// yields a methodology without a criteria list and entries without
    /// statistics.
    pub async fn render(
        &self,
        result: &RankingResult,
        category: &str,
        ranking_type: &str,
        custom_methodology: Option<&str>,
    ) -> RankingDocument {
        let introduction = self
            .generate_or(
                &format!(
                    "Write a 150-word introduction for a ranking of the {} colleges in {}.",
                    ranking_type, category
                ),
                || format!("Ranking of {} colleges in {}.", ranking_type, category),
            )
            .await;

        let methodology = match custom_methodology {
            Some(text) => text.to_string(),
            None => self.methodology(category, ranking_type),
        };

        let mut entries = Vec::with_capacity(result.len());
        for (index, college) in result.iter().enumerate() {
            entries.push(self.entry(index + 1, college, category, ranking_type).await);
        }

        let conclusion = self
            .generate_or(
                &format!(
                    "Write a 100-word conclusion summarizing the {} colleges in {} and offering advice for prospective students considering these specific aspects.",
                    ranking_type, category
                ),
                || {
                    format!(
                        "This concludes our ranking of {} colleges in {}. We hope this information helps prospective students in their college selection process.",
                        ranking_type, category
                    )
                },
            )
            .await;

        RankingDocument {
            introduction,
            methodology,
            heading: format!("{} Colleges in {}", ranking_type, category),
            entries,
            conclusion,
        }
    }

    fn methodology(&self, category: &str, ranking_type: &str) -> String {
        let mut text = format!(
            "Our rankings of the {} colleges in {} are based on a comprehensive analysis",
            ranking_type, category
        );
        match self.registry.get(ranking_type) {
            Some(rt) => {
                let _ = write!(
                    text,
                    " that takes into account the following factors: {}. ",
                    rt.criteria.join(", ")
                );
            }
            None => {
                tracing::warn!(ranking_type = %ranking_type, "Ranking type not found, omitting criteria");
                text.push_str(". ");
            }
        }
        let _ = write!(
            text,
            "Data is sourced from the College Scorecard, supplemented with additional research and expert insights. Each factor is weighted to reflect its importance in this {} ranking, ensuring a balanced and accurate representation of each institution's strengths.",
            ranking_type
        );
        text
    }

    async fn entry(
        &self,
        rank: usize,
        college: &ScoredCollege,
        category: &str,
        ranking_type: &str,
    ) -> RankedEntry {
        let name = college.name();
        let summary = self
            .generate_or(
                &format!(
                    "Write a 100-word summary of {} focusing on its strengths as a {} college in {}. Include key programs, notable features, and outcomes relevant to this ranking type.",
                    name, ranking_type, category
                ),
                || format!("Information about {} and its programs in {}.", name, category),
            )
            .await;

        let statistics = self
            .registry
            .get(ranking_type)
            .map(|rt| {
                rt.criterion_keys()
                    .map(|(criterion, key)| KeyStatistic {
                        label: criterion.to_string(),
                        value: format_optional_stat(&key, college.profile.attribute(&key)),
                    })
                    .collect()
            })
            .unwrap_or_default();

        RankedEntry {
            rank,
            name: name.to_string(),
            score: college.score,
            summary,
            statistics,
        }
    }

    async fn generate_or<F>(&self, prompt: &str, fallback: F) -> String
    where
        F: FnOnce() -> String,
    {
        match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, "Text generation failed, using fallback");
                fallback()
            }
        }
    }
}
