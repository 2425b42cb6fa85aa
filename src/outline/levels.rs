//! Mapping from font size to heading level.

use std::collections::HashMap;

use super::histogram::{FontSizeHistogram, SizeKey};

/// Assigns heading levels to the largest font sizes in a document.
///
/// Levels are contiguous starting at 1 (largest size). At most
/// `max_levels` sizes are kept; an empty map means no headings are
/// extractable from the document.
#[derive(Debug, Clone, Default)]
pub struct HeadingLevelMap {
    levels: HashMap<SizeKey, u8>,
}

impl HeadingLevelMap {
    /// Derive a level map from a histogram, keeping at most `max_levels`
    /// of the largest distinct sizes.
    pub fn from_histogram(histogram: &FontSizeHistogram, max_levels: usize) -> Self {
        let levels = histogram
            .sizes_descending()
            .into_iter()
            .take(max_levels)
            .enumerate()
            .map(|(i, size)| (size, (i + 1) as u8))
            .collect();
        Self { levels }
    }

    /// Look up the heading level for a font size, if it is one of the
    /// selected heading sizes.
    pub fn level_for(&self, size: f32) -> Option<u8> {
        self.levels.get(&SizeKey::from_size(size)).copied()
    }

    /// Check whether no heading sizes were selected.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of heading levels in the map.
    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Span};

    fn histogram_of(sizes: &[f32]) -> FontSizeHistogram {
        let spans = sizes
            .iter()
            .map(|&s| Span::new("heading text", s))
            .collect();
        FontSizeHistogram::build(&[Page::with_spans(1, spans)], 4)
    }

    #[test]
    fn test_levels_assigned_largest_first() {
        let map = HeadingLevelMap::from_histogram(&histogram_of(&[12.0, 24.0, 18.0]), 3);
        assert_eq!(map.level_for(24.0), Some(1));
        assert_eq!(map.level_for(18.0), Some(2));
        assert_eq!(map.level_for(12.0), Some(3));
    }

    #[test]
    fn test_max_levels_cap() {
        let map = HeadingLevelMap::from_histogram(&histogram_of(&[10.0, 12.0, 14.0, 16.0, 18.0]), 3);
        assert_eq!(map.len(), 3);
        assert_eq!(map.level_for(18.0), Some(1));
        assert_eq!(map.level_for(14.0), Some(3));
        // Smaller sizes fall outside the top-K and never produce headings
        assert_eq!(map.level_for(12.0), None);
        assert_eq!(map.level_for(10.0), None);
    }

    #[test]
    fn test_fewer_sizes_than_max() {
        let map = HeadingLevelMap::from_histogram(&histogram_of(&[12.0]), 3);
        assert_eq!(map.len(), 1);
        assert_eq!(map.level_for(12.0), Some(1));
    }

    #[test]
    fn test_empty_histogram_gives_empty_map() {
        let map = HeadingLevelMap::from_histogram(&FontSizeHistogram::new(), 3);
        assert!(map.is_empty());
        assert_eq!(map.level_for(12.0), None);
    }
}
