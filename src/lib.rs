//! # pdfsift
//!
//! Heuristic structure and relevance extraction for PDF documents.
//!
//! Two pipelines share one primitive — a page's decoded text spans with
//! font sizes — and apply different heuristics to it:
//!
//! - **Outline extraction**: infers a heading hierarchy from the
//!   document-wide font-size distribution, then filters per-page heading
//!   candidates.
//! - **Relevance ranking**: scores every page of a document collection
//!   against a persona/task keyword set and surfaces the most relevant
//!   pages with text snippets.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsift::{extract_outline, JsonFormat};
//!
//! fn main() -> pdfsift::Result<()> {
//!     if let Some(outline) = extract_outline("document.pdf")? {
//!         println!("{}", pdfsift::json::to_json(&outline, JsonFormat::Pretty)?);
//!     } else {
//!         println!("no outline extractable");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Both pipelines also work on in-memory page data, which is how the test
//! suites exercise them; see [`OutlineExtractor::extract`] and
//! [`RelevanceRanker::score_document`].

pub mod config;
pub mod decode;
pub mod error;
pub mod json;
pub mod model;
pub mod outline;
pub mod rank;

// Re-export commonly used types
pub use config::{CollectionConfig, DocumentRef, JobToBeDone, Persona};
pub use decode::{DocumentDecoder, LopdfDecoder};
pub use error::{Error, Result};
pub use json::JsonFormat;
pub use model::{
    CollectionMetadata, CollectionResult, DocumentOutline, Heading, Page, PageSnippet,
    RankedSection, Span,
};
pub use outline::{
    looks_like_heading, FontSizeHistogram, HeadingLevelMap, OutlineExtractor, OutlineOptions,
    SizeKey,
};
pub use rank::{relevance_score, KeywordSet, RankOptions, RelevanceRanker};

use std::path::Path;

/// Extract an outline from a PDF file with default options.
///
/// Returns `Ok(None)` when the document has no pages or no qualifying
/// font sizes — a legitimate "no outline" result.
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<Option<DocumentOutline>> {
    OutlineExtractor::new().extract_file(path)
}

/// Extract an outline from a PDF file with custom options.
pub fn extract_outline_with_options<P: AsRef<Path>>(
    path: P,
    options: OutlineOptions,
) -> Result<Option<DocumentOutline>> {
    OutlineExtractor::with_options(options).extract_file(path)
}

/// Rank a collection: load its configuration, score every page of every
/// listed document, and aggregate the result.
///
/// Unreadable documents inside the collection are logged and skipped;
/// missing or malformed configuration fails the whole collection.
pub fn rank_collection<P: AsRef<Path>>(config_path: P, pdf_dir: P) -> Result<CollectionResult> {
    rank_collection_with_options(config_path, pdf_dir, RankOptions::default())
}

/// Rank a collection with custom options.
pub fn rank_collection_with_options<P: AsRef<Path>>(
    config_path: P,
    pdf_dir: P,
    options: RankOptions,
) -> Result<CollectionResult> {
    let config = CollectionConfig::load(config_path)?;
    let ranker = RelevanceRanker::with_options(options);
    Ok(ranker.rank_collection(&config, pdf_dir.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_outline_missing_file() {
        let result = extract_outline("/nonexistent/missing.pdf");
        assert!(result.is_err());
    }

    #[test]
    fn test_rank_collection_missing_config() {
        let err = rank_collection("/nonexistent/input.json", "/nonexistent").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_default_options() {
        let outline = OutlineOptions::default();
        assert_eq!(outline.min_heading_length, 4);
        assert_eq!(outline.max_heading_levels, 3);

        let rank = RankOptions::default();
        assert_eq!(rank.max_sections, 5);
        assert_eq!(rank.max_text_length, 500);
        assert_eq!(rank.score_threshold, 1);
    }
}
