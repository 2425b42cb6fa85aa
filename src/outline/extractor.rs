//! Outline extraction orchestrator.

use std::collections::HashSet;
use std::path::Path;

use crate::decode::{DocumentDecoder, LopdfDecoder};
use crate::error::Result;
use crate::model::{DocumentOutline, Heading, Page};

use super::filter::looks_like_heading;
use super::histogram::FontSizeHistogram;
use super::levels::HeadingLevelMap;

/// Thresholds for outline extraction.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Minimum trimmed span length to participate in font analysis and
    /// heading extraction
    pub min_heading_length: usize,

    /// Maximum number of heading levels to infer
    pub max_heading_levels: usize,
}

impl OutlineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum heading length.
    pub fn with_min_heading_length(mut self, length: usize) -> Self {
        self.min_heading_length = length;
        self
    }

    /// Set the maximum number of heading levels.
    pub fn with_max_heading_levels(mut self, levels: usize) -> Self {
        self.max_heading_levels = levels;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            min_heading_length: 4,
            max_heading_levels: 3,
        }
    }
}

/// Infers a heading hierarchy from a document's font-size distribution.
pub struct OutlineExtractor {
    options: OutlineOptions,
}

impl OutlineExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(OutlineOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Extract an outline from decoded page data.
    ///
    /// Returns `None` when the document has no pages or no qualifying font
    /// sizes; that is a legitimate "no outline" result, not an error.
    pub fn extract(&self, title: &str, pages: &[Page]) -> Option<DocumentOutline> {
        if pages.is_empty() {
            return None;
        }

        let histogram = FontSizeHistogram::build(pages, self.options.min_heading_length);
        let levels = HeadingLevelMap::from_histogram(&histogram, self.options.max_heading_levels);
        if levels.is_empty() {
            log::debug!("no qualifying font sizes in '{}'", title);
            return None;
        }

        let mut headings = Vec::new();
        for page in pages {
            self.collect_page_headings(page, &levels, &mut headings);
        }

        Some(DocumentOutline::new(title, headings, pages.len() as u32))
    }

    /// Open a PDF file and extract its outline, titling it after the
    /// filename stem.
    ///
    /// Decode failures propagate as errors; the caller decides whether to
    /// abort or log and move on to the next document.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<DocumentOutline>> {
        let path = path.as_ref();
        let decoder = LopdfDecoder::open(path)?;
        let pages = decoder.pages()?;

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());

        Ok(self.extract(&title, &pages))
    }

    /// Scan one page for heading candidates.
    ///
    /// The duplicate-suppression set is scoped to this page; identical text
    /// on a later page produces a fresh heading.
    fn collect_page_headings(
        &self,
        page: &Page,
        levels: &HeadingLevelMap,
        headings: &mut Vec<Heading>,
    ) {
        let mut seen: HashSet<&str> = HashSet::new();

        for span in &page.spans {
            let text = span.trimmed();
            if text.chars().count() < self.options.min_heading_length {
                continue;
            }
            if seen.contains(text) {
                continue;
            }
            let Some(level) = levels.level_for(span.font_size) else {
                continue;
            };
            if !looks_like_heading(text) {
                continue;
            }

            headings.push(Heading::new(level, text, page.number));
            seen.insert(text);
        }
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
