//! Outline extraction: font-size frequency analysis and heading inference.
//!
//! The extractor assumes heading fonts recur across a document. A document
//! that sets every heading in a unique font size will under- or over-fit
//! the top-K size selection; that is a known accuracy boundary of the
//! heuristic, not a defect.

mod extractor;
mod filter;
mod histogram;
mod levels;

pub use extractor::{OutlineExtractor, OutlineOptions};
pub use filter::looks_like_heading;
pub use histogram::{FontSizeHistogram, SizeKey};
pub use levels::HeadingLevelMap;
