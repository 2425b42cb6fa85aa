//! Document-wide font-size frequency table.

use std::collections::HashMap;

use crate::model::Page;

/// A font size bucketed to 0.1 pt precision so it can key a map.
///
/// Sizes that land in the same bucket are treated as the same heading size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SizeKey(i32);

impl SizeKey {
    /// Bucket a font size.
    pub fn from_size(size: f32) -> Self {
        Self((size * 10.0).round() as i32)
    }

    /// The bucket's size in points.
    pub fn points(self) -> f32 {
        self.0 as f32 / 10.0
    }
}

/// Occurrence counts per font size, built once per document and read-only
/// afterwards.
///
/// Only spans whose trimmed text is at least `min_heading_length`
/// characters long are counted; shorter spans are invisible to the whole
/// outline pipeline.
#[derive(Debug, Clone, Default)]
pub struct FontSizeHistogram {
    counts: HashMap<SizeKey, u32>,
}

impl FontSizeHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram over every qualifying span in the document.
    pub fn build(pages: &[Page], min_heading_length: usize) -> Self {
        let mut histogram = Self::new();
        for page in pages {
            for span in &page.spans {
                if span.trimmed().chars().count() >= min_heading_length {
                    histogram.add_size(span.font_size);
                }
            }
        }
        histogram
    }

    /// Count one occurrence of a font size.
    pub fn add_size(&mut self, size: f32) {
        *self.counts.entry(SizeKey::from_size(size)).or_insert(0) += 1;
    }

    /// Occurrence count for a size (0 if never seen).
    pub fn count(&self, size: f32) -> u32 {
        self.counts
            .get(&SizeKey::from_size(size))
            .copied()
            .unwrap_or(0)
    }

    /// Check whether no qualifying span was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct font sizes observed.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Distinct sizes present, sorted largest first.
    pub fn sizes_descending(&self) -> Vec<SizeKey> {
        let mut sizes: Vec<SizeKey> = self.counts.keys().copied().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}
