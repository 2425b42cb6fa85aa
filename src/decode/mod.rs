//! Document decoding: turning a PDF into pages of text spans.
//!
//! The core pipelines only consume [`Page`]/[`Span`] data; this module is
//! the collaborator that produces it. [`DocumentDecoder`] is the seam, and
//! [`LopdfDecoder`] the lopdf-backed implementation.

mod lopdf_decoder;

use crate::error::Result;
use crate::model::Page;

pub use lopdf_decoder::LopdfDecoder;

/// Abstract interface for reading a document's text spans.
///
/// Implementations must yield pages in order, 1-indexed, each with its
/// spans in layout order, and fail distinguishably when the underlying
/// document cannot be read.
pub trait DocumentDecoder {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Decode every page into its ordered span sequence.
    fn pages(&self) -> Result<Vec<Page>>;
}

/// Simple text decoding fallback when no font encoding is available.
pub(crate) fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    // UTF-8
    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Fallback: Latin-1
    bytes.iter().map(|&b| b as char).collect()
}
