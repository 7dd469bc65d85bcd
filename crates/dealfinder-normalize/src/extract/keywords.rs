use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use dealfinder_core::constants::MAX_KEYWORDS;

/// Common words dropped from keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "from", "of",
    "is", "are", "was", "were", "be", "been",
];

static RE_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\w+\b").ok());

/// Tokenize title + content into searchable keywords: stop words and
/// tokens shorter than 3 chars dropped, deduped preserving first-seen
/// order, capped at `MAX_KEYWORDS`.
pub fn extract_keywords(title: &str, content: &str) -> Vec<String> {
    let Some(re) = RE_WORD.as_ref() else {
        return Vec::new();
    };

    let text = format!("{title} {content}").to_lowercase();
    let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for m in re.find_iter(&text) {
        let word = m.as_str();
        if word.len() <= 2 || stop.contains(word) {
            continue;
        }
        if seen.insert(word.to_string()) {
            keywords.push(word.to_string());
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
    }

    keywords
}
