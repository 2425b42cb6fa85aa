//! Keyword relevance scoring.

use super::keywords::KeywordSet;

/// Score a block of page text against a keyword set.
///
/// The score is the number of distinct keywords that occur at least once
/// as a substring of the lowercased text — a presence count, not a
/// frequency sum. Matching is deliberately not word-boundary aware
/// ("art" matches inside "chart").
pub fn relevance_score(text: &str, keywords: &KeywordSet) -> u32 {
    let text_lower = text.to_lowercase();
    keywords
        .words()
        .iter()
        .filter(|kw| text_lower.contains(kw.as_str()))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_count_not_frequency() {
        let keywords = KeywordSet::from_persona_task("budget", "overview 2024");
        // "overview" could substring-match more than once; each keyword
        // still contributes at most 1
        let score = relevance_score("Budget Overview overview", &keywords);
        assert_eq!(score, 2);
    }

    #[test]
    fn test_case_insensitive() {
        let keywords = KeywordSet::from_persona_task("CHEF", "");
        assert_eq!(relevance_score("the chef recommends", &keywords), 1);
        assert_eq!(relevance_score("The Chef Recommends", &keywords), 1);
    }

    #[test]
    fn test_substring_matching() {
        let keywords = KeywordSet::from_persona_task("art", "");
        assert_eq!(relevance_score("see the chart below", &keywords), 1);
    }

    #[test]
    fn test_no_matches() {
        let keywords = KeywordSet::from_persona_task("finance", "quarterly");
        assert_eq!(relevance_score("unrelated page content", &keywords), 0);
    }

    #[test]
    fn test_monotonic_in_keywords() {
        let text = "the hotel restaurant serves breakfast daily";
        let few = KeywordSet::from_persona_task("hotel", "");
        let more = KeywordSet::from_persona_task("hotel", "restaurant breakfast");
        assert!(relevance_score(text, &more) >= relevance_score(text, &few));
    }
}
