use regex::Regex;
use std::sync::LazyLock;

use dealfinder_core::price::format_price;

// Ordered attempts; first pattern whose capture parses wins.
static RE_CURRENCY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\$([0-9,]+\.?[0-9]*)").ok());
static RE_LABELED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)price[:\s]*\$?([0-9,]+\.?[0-9]*)").ok());
static RE_DOLLARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9,]+\.?[0-9]*)\s*dollars?").ok());

/// Extract a price from content text, normalized to "$X.YY".
pub fn extract_price(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }

    for pattern in [&RE_CURRENCY, &RE_LABELED, &RE_DOLLARS] {
        let Some(re) = pattern.as_ref() else { continue };
        for caps in re.captures_iter(content) {
            let raw = caps.get(1)?.as_str().replace(',', "");
            if let Ok(value) = raw.parse::<f64>() {
                return Some(format_price(value));
            }
        }
    }

    None
}
