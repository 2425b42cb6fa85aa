//! Keyword set derivation from persona and task strings.

use std::collections::HashSet;

/// The lowercase keywords a collection is ranked against.
///
/// Built once per collection by splitting the persona role and task
/// description on whitespace; duplicates are dropped, first occurrence
/// order is kept. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    /// Build the keyword set for a persona/task pair.
    pub fn from_persona_task(persona_role: &str, task_description: &str) -> Self {
        let combined = format!("{} {}", persona_role, task_description).to_lowercase();

        let mut seen = HashSet::new();
        let words = combined
            .split_whitespace()
            .filter(|w| seen.insert(w.to_string()))
            .map(str::to_string)
            .collect();

        Self { words }
    }

    /// The keywords, in first-occurrence order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_split() {
        let set = KeywordSet::from_persona_task("Travel Planner", "Plan a Trip");
        assert_eq!(set.words(), &["travel", "planner", "plan", "a", "trip"]);
    }

    #[test]
    fn test_duplicates_dropped() {
        let set = KeywordSet::from_persona_task("budget analyst", "analyze the budget");
        assert_eq!(set.words(), &["budget", "analyst", "analyze", "the"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_empty_inputs() {
        let set = KeywordSet::from_persona_task("", "");
        assert!(set.is_empty());
    }
}
