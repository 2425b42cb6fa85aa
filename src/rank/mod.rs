//! Relevance ranking: keyword scoring of pages against a persona/task.

mod keywords;
mod ranker;
mod scorer;

pub use keywords::KeywordSet;
pub use ranker::{RankOptions, RelevanceRanker};
pub use scorer::relevance_score;
