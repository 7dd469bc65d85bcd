use regex::Regex;
use std::sync::LazyLock;

/// Store names stripped when they prefix a listing title.
const STORE_PREFIXES: &[&str] = &["Amazon.com", "Best Buy", "Walmart", "Target", "eBay"];

static RE_TRAILING_AMAZON: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*[-|]\s*Amazon\.com$").ok());
static RE_TRAILING_PARENS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)$").ok());

/// Clean a raw listing title: drop store prefixes and trailing junk.
pub fn clean_title(title: &str) -> String {
    let mut clean = title.trim().to_string();

    for prefix in STORE_PREFIXES {
        if clean.starts_with(prefix) {
            clean = clean[prefix.len()..].trim_matches([' ', ':', '-']).to_string();
        }
    }

    if let Some(re) = RE_TRAILING_AMAZON.as_ref() {
        clean = re.replace(&clean, "").to_string();
    }
    if let Some(re) = RE_TRAILING_PARENS.as_ref() {
        clean = re.replace(&clean, "").to_string();
    }

    clean.trim().to_string()
}

/// Short product name: the segment before the first dash, when one exists.
pub fn clean_name(cleaned_title: &str) -> String {
    match cleaned_title.split_once('-') {
        Some((head, _)) => head.trim().to_string(),
        None => cleaned_title.to_string(),
    }
}
