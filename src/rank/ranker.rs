//! Relevance ranking orchestrator.

use std::path::Path;

use crate::config::CollectionConfig;
use crate::decode::{DocumentDecoder, LopdfDecoder};
use crate::model::{CollectionMetadata, CollectionResult, Page, PageSnippet, RankedSection};

use super::keywords::KeywordSet;
use super::scorer::relevance_score;

/// Thresholds for relevance ranking.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Maximum number of sections kept in the ranked output
    pub max_sections: usize,

    /// Maximum snippet length in characters (hard cut, not word-aware)
    pub max_text_length: usize,

    /// A page qualifies when its score is strictly greater than this
    pub score_threshold: u32,
}

impl RankOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of ranked sections.
    pub fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections = max;
        self
    }

    /// Set the maximum snippet length.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    /// Set the score threshold.
    pub fn with_score_threshold(mut self, threshold: u32) -> Self {
        self.score_threshold = threshold;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_sections: 5,
            max_text_length: 500,
            score_threshold: 1,
        }
    }
}

/// Scores and ranks document pages against a collection's keyword set.
pub struct RelevanceRanker {
    options: RankOptions,
}

impl RelevanceRanker {
    /// Create a ranker with default options.
    pub fn new() -> Self {
        Self::with_options(RankOptions::default())
    }

    /// Create a ranker with custom options.
    pub fn with_options(options: RankOptions) -> Self {
        Self { options }
    }

    /// Score every page of one document.
    ///
    /// Pages whose trimmed text is empty are skipped. A qualifying page
    /// (score strictly above the threshold) yields one section record and
    /// one snippet, both in page order.
    pub fn score_document(
        &self,
        document: &str,
        pages: &[Page],
        keywords: &KeywordSet,
    ) -> (Vec<RankedSection>, Vec<PageSnippet>) {
        let mut sections = Vec::new();
        let mut snippets = Vec::new();

        for page in pages {
            let text = page.plain_text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            let score = relevance_score(&text, keywords);
            if score > self.options.score_threshold {
                sections.push(RankedSection::new(document, score, page.number));
                snippets.push(PageSnippet {
                    document: document.to_string(),
                    refined_text: truncate_chars(trimmed, self.options.max_text_length),
                    page_number: page.number,
                });
            }
        }

        (sections, snippets)
    }

    /// Stable-sort sections by score descending and keep the top N.
    ///
    /// Equal scores keep their original encounter order.
    pub fn select_top(&self, mut sections: Vec<RankedSection>) -> Vec<RankedSection> {
        sections.sort_by(|a, b| b.importance_rank.cmp(&a.importance_rank));
        sections.truncate(self.options.max_sections);
        sections
    }

    /// Process a whole collection: every listed document, every page.
    ///
    /// A document that cannot be opened or decoded is logged and
    /// contributes nothing; the rest of the collection continues. The
    /// ranked section list is truncated to the top N; the snippet list is
    /// kept in full.
    pub fn rank_collection(&self, config: &CollectionConfig, pdf_dir: &Path) -> CollectionResult {
        let keywords =
            KeywordSet::from_persona_task(&config.persona.role, &config.job_to_be_done.task);

        let mut all_sections = Vec::new();
        let mut all_snippets = Vec::new();

        for doc in &config.documents {
            let path = pdf_dir.join(&doc.filename);
            let pages = match LopdfDecoder::open(&path).and_then(|d| d.pages()) {
                Ok(pages) => pages,
                Err(e) => {
                    log::error!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let (sections, snippets) = self.score_document(&doc.filename, &pages, &keywords);
            all_sections.extend(sections);
            all_snippets.extend(snippets);
        }

        CollectionResult {
            metadata: CollectionMetadata {
                input_documents: config.filenames(),
                persona: config.persona.role.clone(),
                job_to_be_done: config.job_to_be_done.task.clone(),
            },
            extracted_sections: self.select_top(all_sections),
            subsection_analysis: all_snippets,
        }
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut a string to at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
