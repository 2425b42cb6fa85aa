//! Page and span types produced by the document decoder.

use serde::{Deserialize, Serialize};

/// The smallest unit of styled text on a page: its content and the font
/// size it was laid out with. Spans arrive from the decoder in content
/// order and are never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    /// Text content as decoded from the page
    pub text: String,

    /// Font size in points (effective size, after text-matrix scaling)
    pub font_size: f32,
}

impl Span {
    /// Create a new span.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
        }
    }

    /// Trimmed text content.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// A single page: its 1-based number and the ordered spans on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text spans in content-stream order
    pub spans: Vec<Span>,
}

impl Page {
    /// Create a page with no spans.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            spans: Vec::new(),
        }
    }

    /// Create a page from existing spans.
    pub fn with_spans(number: u32, spans: Vec<Span>) -> Self {
        Self { number, spans }
    }

    /// Add a span to the page.
    pub fn add_span(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Concatenated text of all spans, space-joined in span order.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the page has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of spans on the page.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }
}
