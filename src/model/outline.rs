//! Outline result types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A heading inferred from font-size analysis.
///
/// One entry per unique heading text per page; identical text on a later
/// page is a distinct heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 = most prominent. Serialized as "H1", "H2", …
    #[serde(
        serialize_with = "serialize_level",
        deserialize_with = "deserialize_level"
    )]
    pub level: u8,

    /// Heading text (trimmed span content)
    pub text: String,

    /// Page the heading appears on (1-indexed)
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: u8, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }

    /// The level rendered as an outline label ("H1", "H2", …).
    pub fn label(&self) -> String {
        format!("H{}", self.level)
    }
}

fn serialize_level<S: Serializer>(level: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("H{}", level))
}

fn deserialize_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.strip_prefix('H')
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid heading level: {}", s)))
}

/// The outline extracted from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title (derived from the filename stem)
    pub title: String,

    /// Headings in document order: page ascending, span order within a page
    pub outline: Vec<Heading>,

    /// Total number of pages in the document
    pub total_pages: u32,

    /// Number of headings found
    pub headings_found: usize,
}

impl DocumentOutline {
    /// Build an outline result, filling in the heading count.
    pub fn new(title: impl Into<String>, outline: Vec<Heading>, total_pages: u32) -> Self {
        let headings_found = outline.len();
        Self {
            title: title.into(),
            outline,
            total_pages,
            headings_found,
        }
    }
}
