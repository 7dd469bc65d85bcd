//! Numbered-reference detection: `#N`, "product N", ordinals.

use regex::Regex;
use std::sync::LazyLock;

static RE_HASH: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"#(\d+)").ok());
static RE_WORDED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:product|number|item)\s+(\d+)").ok());
static RE_ORDINAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|1st|2nd|3rd|4th|5th|6th|7th|8th|9th|10th)\b",
    )
    .ok()
});

/// Detect numbered product references in a query, sorted and deduped.
pub fn detect_numbers(query: &str) -> Vec<u32> {
    let mut numbers = Vec::new();

    if let Some(re) = RE_HASH.as_ref() {
        for caps in re.captures_iter(query) {
            if let Ok(n) = caps[1].parse::<u32>() {
                numbers.push(n);
            }
        }
    }

    if let Some(re) = RE_WORDED.as_ref() {
        for caps in re.captures_iter(query) {
            if let Ok(n) = caps[1].parse::<u32>() {
                numbers.push(n);
            }
        }
    }

    if let Some(re) = RE_ORDINAL.as_ref() {
        for caps in re.captures_iter(query) {
            if let Some(n) = ordinal_value(&caps[1].to_lowercase()) {
                numbers.push(n);
            }
        }
    }

    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

fn ordinal_value(word: &str) -> Option<u32> {
    let n = match word {
        "first" | "1st" => 1,
        "second" | "2nd" => 2,
        "third" | "3rd" => 3,
        "fourth" | "4th" => 4,
        "fifth" | "5th" => 5,
        "sixth" | "6th" => 6,
        "seventh" | "7th" => 7,
        "eighth" | "8th" => 8,
        "ninth" | "9th" => 9,
        "tenth" | "10th" => 10,
        _ => return None,
    };
    Some(n)
}
