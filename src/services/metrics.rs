use once_cell::sync::OnceCell;
use regex::Regex;

static TAG_PATTERN: OnceCell<Regex> = OnceCell::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Replaces markup tags with spaces and collapses whitespace runs.
/// Idempotent: stripping already-stripped text is a no-op.
pub fn strip_tags(text: &str) -> String {
    let stripped = tag_pattern().replace_all(text, " ");
    stripped
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Number of whitespace-separated tokens after tag stripping.
pub fn word_count(text: &str) -> usize {
    strip_tags(text).split_whitespace().count()
}

/// Percentage of the document's word count attributable to occurrences of
/// `keyword` in the stripped, lowercased text.
///
/// Matching is a naive case-insensitive substring count: a keyword that is
/// a substring of a longer word inflates the count. That is the documented
/// behavior, not a bug.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let total_words = word_count(text);
    if total_words == 0 {
        return 0.0;
    }

    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return 0.0;
    }

    let haystack = strip_tags(text).to_lowercase();
    let occurrences = haystack.matches(&needle).count();

    (occurrences as f64 / total_words as f64) * 100.0
}
