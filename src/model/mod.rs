//! Value objects shared by the outline and ranking pipelines.
//!
//! Everything here is created and consumed within a single document or
//! collection processing call; nothing holds shared mutable state.

mod outline;
mod relevance;
mod span;

pub use outline::{DocumentOutline, Heading};
pub use relevance::{CollectionMetadata, CollectionResult, PageSnippet, RankedSection};
pub use span::{Page, Span};
