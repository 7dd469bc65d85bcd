use regex::Regex;
use std::sync::LazyLock;

static RE_SAVE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)save\s*\$[0-9,]+\.?[0-9]*").ok());
static RE_PERCENT_OFF: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9]+%\s*off").ok());
static RE_LABELED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)discount[:\s]*[0-9]+%").ok());
static RE_NEGATIVE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"-[0-9]+%").ok());

/// Extract a discount signal from content text, keeping it as found
/// ("25% off", "Save $50").
pub fn extract_discount(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }

    for pattern in [&RE_SAVE, &RE_PERCENT_OFF, &RE_LABELED, &RE_NEGATIVE] {
        let Some(re) = pattern.as_ref() else { continue };
        if let Some(m) = re.find(content) {
            return Some(m.as_str().to_string());
        }
    }

    None
}
