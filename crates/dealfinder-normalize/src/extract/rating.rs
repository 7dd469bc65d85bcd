use regex::Regex;
use std::sync::LazyLock;

static RE_OUT_OF_FIVE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]\.?[0-9]*)\s*out of 5").ok());
static RE_LABELED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)rating[:\s]*([0-9]\.?[0-9]*)").ok());
static RE_STARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]\.?[0-9]*)\s*stars?").ok());
static RE_SLASH_FIVE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]\.?[0-9]*)/5").ok());

/// Extract a star rating from content text.
///
/// Out-of-range matches are discarded, not clamped; the next pattern gets
/// a chance instead.
pub fn extract_rating(content: &str) -> Option<f64> {
    if content.is_empty() {
        return None;
    }

    for pattern in [&RE_OUT_OF_FIVE, &RE_LABELED, &RE_STARS, &RE_SLASH_FIVE] {
        let Some(re) = pattern.as_ref() else { continue };
        if let Some(caps) = re.captures(content) {
            if let Ok(rating) = caps.get(1)?.as_str().parse::<f64>() {
                if (0.0..=5.0).contains(&rating) {
                    return Some(rating);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_rating_forms() {
        assert_eq!(extract_rating("4.5 out of 5"), Some(4.5));
        assert_eq!(extract_rating("Rating: 3.8"), Some(3.8));
        assert_eq!(extract_rating("4 stars"), Some(4.0));
        assert_eq!(extract_rating("rated 4.7/5"), Some(4.7));
    }

    #[test]
    fn out_of_range_is_discarded() {
        // "Rating: 9.5" is out of range; no other pattern matches.
        assert_eq!(extract_rating("Rating: 9.5"), None);
    }

    #[test]
    fn no_rating_yields_none() {
        assert_eq!(extract_rating("brand new product"), None);
    }
}
