//! lopdf-backed document decoder.
//!
//! Walks each page's content stream tracking the active font and text
//! matrix, and emits one [`Span`] per text-showing operation with the
//! effective (scaled) font size. Positions, line grouping, and column
//! detection are deliberately not modeled; the pipelines only need text,
//! size, and order.

use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::{Page, Span};

use super::{decode_text_simple, DocumentDecoder};

/// Kerning adjustment (in 1/1000 text-space units) beyond which a TJ
/// positioning value is treated as a word space.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Decoder backed by `lopdf::Document`.
pub struct LopdfDecoder {
    doc: LopdfDocument,
}

impl LopdfDecoder {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Ok(Self { doc })
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Ok(Self { doc })
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Extract the spans of a single page.
    fn page_spans(&self, page_number: u32, page_id: ObjectId) -> Result<Page> {
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::Decode(e.to_string()))?;

        let content = self.page_content(page_id)?;
        let content = lopdf::content::Content::decode(&content)
            .map_err(|e| Error::ContentStream(e.to_string()))?;

        let mut page = Page::new(page_number);
        let mut state = TextState::default();
        let mut in_text_block = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    state.scale = 1.0;
                }
                "ET" => {
                    in_text_block = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(name) = &op.operands[0] {
                            state.font_name = name.clone();
                        }
                        state.font_size = as_number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let a = as_number(&op.operands[0]).unwrap_or(1.0);
                        let c = as_number(&op.operands[2]).unwrap_or(0.0);
                        state.scale = (a * a + c * c).sqrt();
                    }
                }
                "Tj" => {
                    if in_text_block {
                        if let Some(Object::String(bytes, _)) = op.operands.first() {
                            let text = self.decode_string(&fonts, &state.font_name, bytes);
                            push_span(&mut page, text, state.effective_size());
                        }
                    }
                }
                "TJ" => {
                    if in_text_block {
                        if let Some(Object::Array(arr)) = op.operands.first() {
                            let text = self.decode_tj_array(&fonts, &state.font_name, arr);
                            push_span(&mut page, text, state.effective_size());
                        }
                    }
                }
                "'" | "\"" => {
                    if in_text_block {
                        let text_idx = if op.operator == "\"" { 2 } else { 0 };
                        if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                            let text = self.decode_string(&fonts, &state.font_name, bytes);
                            push_span(&mut page, text, state.effective_size());
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(page)
    }

    /// Get a page's decompressed content stream bytes.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::Decode(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::Decode(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::ContentStream(e.to_string()));
                }
                Err(Error::ContentStream("invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::ContentStream("invalid content stream".to_string())),
        }
    }

    /// Decode a text string through the current font's encoding, with a
    /// byte-level fallback.
    fn decode_string(
        &self,
        fonts: &std::collections::BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
        bytes: &[u8],
    ) -> String {
        if let Some(font_dict) = fonts.get(font_name) {
            if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                    return text;
                }
            }
        }
        decode_text_simple(bytes)
    }

    /// Decode a TJ operand array: strings joined, with large negative
    /// positioning adjustments treated as word spaces.
    fn decode_tj_array(
        &self,
        fonts: &std::collections::BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
        arr: &[Object],
    ) -> String {
        let mut combined = String::new();
        for item in arr {
            match item {
                Object::String(bytes, _) => {
                    combined.push_str(&self.decode_string(fonts, font_name, bytes));
                }
                Object::Integer(n) => {
                    maybe_push_space(&mut combined, -(*n as f32));
                }
                Object::Real(n) => {
                    maybe_push_space(&mut combined, -n);
                }
                _ => {}
            }
        }
        combined
    }
}

impl DocumentDecoder for LopdfDecoder {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn pages(&self) -> Result<Vec<Page>> {
        self.doc
            .get_pages()
            .into_iter()
            .map(|(number, page_id)| self.page_spans(number, page_id))
            .collect()
    }
}

/// Current text state while walking a content stream.
struct TextState {
    font_name: Vec<u8>,
    font_size: f32,
    scale: f32,
}

impl TextState {
    fn effective_size(&self) -> f32 {
        self.font_size * self.scale
    }
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font_name: Vec::new(),
            font_size: 12.0,
            scale: 1.0,
        }
    }
}

fn push_span(page: &mut Page, text: String, font_size: f32) {
    if !text.trim().is_empty() {
        page.add_span(Span::new(text, font_size));
    }
}

fn maybe_push_space(combined: &mut String, adjustment: f32) {
    if adjustment > TJ_SPACE_THRESHOLD && !combined.is_empty() && !combined.ends_with(' ') {
        combined.push(' ');
    }
}

/// Extract a number from a PDF object.
fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
