//! Integration tests for outline extraction on synthetic page data.

use pdfsift::{
    FontSizeHistogram, Heading, HeadingLevelMap, OutlineExtractor, OutlineOptions, Page, Span,
};

fn page(number: u32, spans: &[(&str, f32)]) -> Page {
    Page::with_spans(
        number,
        spans.iter().map(|(t, s)| Span::new(*t, *s)).collect(),
    )
}

#[test]
fn test_level_map_bounds_and_contiguity() {
    // Five distinct sizes, K = 3: levels must be exactly {1, 2, 3}
    let pages = vec![page(
        1,
        &[
            ("size ten", 10.0),
            ("size twelve", 12.0),
            ("size fourteen", 14.0),
            ("size sixteen", 16.0),
            ("size eighteen", 18.0),
        ],
    )];

    let histogram = FontSizeHistogram::build(&pages, 4);
    let map = HeadingLevelMap::from_histogram(&histogram, 3);

    assert_eq!(map.len(), 3);
    assert_eq!(map.level_for(18.0), Some(1));
    assert_eq!(map.level_for(16.0), Some(2));
    assert_eq!(map.level_for(14.0), Some(3));
    assert_eq!(map.level_for(12.0), None);
}

#[test]
fn test_level_map_with_fewer_distinct_sizes_than_k() {
    let pages = vec![page(1, &[("only heading", 20.0), ("also heading", 20.0)])];

    let histogram = FontSizeHistogram::build(&pages, 4);
    let map = HeadingLevelMap::from_histogram(&histogram, 3);

    assert_eq!(map.len(), 1);
    assert_eq!(map.level_for(20.0), Some(1));
}

#[test]
fn test_document_order_page_then_span() {
    let pages = vec![
        page(1, &[("Second On Page", 18.0), ("First Level", 24.0)]),
        page(2, &[("Later Page", 24.0)]),
    ];

    let outline = OutlineExtractor::new().extract("doc", &pages).unwrap();
    let texts: Vec<&str> = outline.outline.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["Second On Page", "First Level", "Later Page"]);

    let pages_seen: Vec<u32> = outline.outline.iter().map(|h| h.page).collect();
    assert_eq!(pages_seen, vec![1, 1, 2]);
}

#[test]
fn test_duplicate_chapter_heading_across_pages() {
    let pages = vec![
        page(1, &[("Chapter 1", 18.0), ("Chapter 1", 18.0)]),
        page(3, &[("Chapter 1", 18.0)]),
    ];

    let outline = OutlineExtractor::new().extract("book", &pages).unwrap();
    assert_eq!(
        outline.outline,
        vec![Heading::new(1, "Chapter 1", 1), Heading::new(1, "Chapter 1", 3)]
    );
}

#[test]
fn test_trailing_period_rejected_at_any_size() {
    for size in [12.0, 18.0, 36.0] {
        let pages = vec![page(1, &[("Introduction.", size), ("Filler text", size)])];
        let outline = OutlineExtractor::new().extract("doc", &pages).unwrap();
        assert!(
            outline.outline.iter().all(|h| h.text != "Introduction."),
            "trailing period must be rejected at size {}",
            size
        );
    }
}

#[test]
fn test_empty_document_is_none_not_error() {
    assert!(OutlineExtractor::new().extract("empty", &[]).is_none());
}

#[test]
fn test_pages_without_qualifying_spans_is_none() {
    // All spans shorter than the minimum heading length
    let pages = vec![page(1, &[("a", 18.0), ("bb", 24.0)]), page(2, &[("cc", 12.0)])];
    assert!(OutlineExtractor::new().extract("doc", &pages).is_none());
}

#[test]
fn test_extraction_is_idempotent() {
    let pages = vec![
        page(1, &[("Main Title", 24.0), ("Subsection", 18.0), ("body copy text", 10.0)]),
        page(2, &[("Another Section", 18.0)]),
    ];

    let extractor = OutlineExtractor::new();
    let a = extractor.extract("doc", &pages).unwrap();
    let b = extractor.extract("doc", &pages).unwrap();

    let json_a = pdfsift::json::to_json(&a, pdfsift::JsonFormat::Compact).unwrap();
    let json_b = pdfsift::json::to_json(&b, pdfsift::JsonFormat::Compact).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn test_serialized_outline_shape() {
    let pages = vec![page(1, &[("Overview", 18.0)])];
    let outline = OutlineExtractor::new().extract("report", &pages).unwrap();

    let json = pdfsift::json::to_json(&outline, pdfsift::JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "report");
    assert_eq!(value["total_pages"], 1);
    assert_eq!(value["headings_found"], 1);
    assert_eq!(value["outline"][0]["level"], "H1");
    assert_eq!(value["outline"][0]["text"], "Overview");
    assert_eq!(value["outline"][0]["page"], 1);
}

#[test]
fn test_threshold_variation_per_run() {
    let pages = vec![page(1, &[("Big", 24.0), ("Tiny", 10.0)])];

    // Default minimum length (4) keeps "Tiny" but drops "Big"
    let outline = OutlineExtractor::new().extract("doc", &pages).unwrap();
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].text, "Tiny");

    // Lowering the minimum brings "Big" in at level 1
    let options = OutlineOptions::new().with_min_heading_length(3);
    let outline = OutlineExtractor::with_options(options)
        .extract("doc", &pages)
        .unwrap();
    assert_eq!(outline.outline.len(), 2);
    assert_eq!(outline.outline[0].text, "Big");
    assert_eq!(outline.outline[0].level, 1);
}
