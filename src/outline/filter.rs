//! The "looks like a heading" candidate filter.

/// Maximum length for a heading candidate; longer texts are almost always
/// paragraphs that happen to share a heading font size.
const MAX_HEADING_CHARS: usize = 200;

/// Minimum ratio of alphanumeric characters; filters out page numbers,
/// bullets, and other symbol-heavy strings.
const MIN_ALNUM_RATIO: f64 = 0.5;

/// Trailing characters that mark a sentence fragment rather than a heading.
const SENTENCE_ENDINGS: [char; 4] = ['.', '!', '?', ';'];

/// Decide whether a candidate text plausibly is a heading.
///
/// Applied after the font-size match and the per-page duplicate check.
/// All checks must pass; any failure rejects the candidate.
pub fn looks_like_heading(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }

    let alnum = text.chars().filter(|c| c.is_alphanumeric()).count();
    if (alnum as f64) / (total as f64) < MIN_ALNUM_RATIO {
        return false;
    }

    if total > MAX_HEADING_CHARS {
        return false;
    }

    if text.ends_with(SENTENCE_ENDINGS) {
        return false;
    }

    true
}
