//! Ranking result types.
//!
//! Field names follow the collection output format: a ranked
//! `extracted_sections` list and an untruncated `subsection_analysis` list.

use serde::{Deserialize, Serialize};

/// A page that scored above the relevance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSection {
    /// Source document filename
    pub document: String,

    /// Synthetic section title ("Page N")
    pub section_title: String,

    /// Relevance score: count of distinct keywords present on the page
    pub importance_rank: u32,

    /// Page number (1-indexed)
    pub page_number: u32,
}

impl RankedSection {
    /// Create a section record for a scored page.
    pub fn new(document: impl Into<String>, score: u32, page_number: u32) -> Self {
        Self {
            document: document.into(),
            section_title: format!("Page {}", page_number),
            importance_rank: score,
            page_number,
        }
    }
}

/// A truncated text excerpt for a qualifying page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnippet {
    /// Source document filename
    pub document: String,

    /// Page text, hard-cut at the configured maximum character count
    pub refined_text: String,

    /// Page number (1-indexed)
    pub page_number: u32,
}

/// Metadata echoed back in the collection output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMetadata {
    /// Every configured document filename, including ones that failed to open
    pub input_documents: Vec<String>,

    /// Persona role string
    pub persona: String,

    /// Task description string
    pub job_to_be_done: String,
}

/// The aggregated result for one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResult {
    /// Input metadata
    pub metadata: CollectionMetadata,

    /// Top-N sections, stable-sorted by importance descending
    pub extracted_sections: Vec<RankedSection>,

    /// Snippets for every qualifying page, in encounter order
    pub subsection_analysis: Vec<PageSnippet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title_from_page() {
        let section = RankedSection::new("guide.pdf", 3, 12);
        assert_eq!(section.section_title, "Page 12");
        assert_eq!(section.importance_rank, 3);
    }

    #[test]
    fn test_collection_result_field_names() {
        let result = CollectionResult {
            metadata: CollectionMetadata {
                input_documents: vec!["a.pdf".to_string()],
                persona: "Analyst".to_string(),
                job_to_be_done: "Review budgets".to_string(),
            },
            extracted_sections: vec![RankedSection::new("a.pdf", 2, 1)],
            subsection_analysis: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"extracted_sections\""));
        assert!(json.contains("\"subsection_analysis\""));
        assert!(json.contains("\"job_to_be_done\""));
        assert!(json.contains("\"importance_rank\""));
    }
}
