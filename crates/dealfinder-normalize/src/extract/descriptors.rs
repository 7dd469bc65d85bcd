use regex::Regex;
use std::sync::LazyLock;

use dealfinder_core::deal::{Condition, Descriptors, PriceTier};
use dealfinder_core::price::parse_price;

/// Fixed color palette, checked in order; first hit wins.
const COLORS: &[&str] = &[
    "black", "white", "silver", "gold", "rose", "blue", "red", "green", "pink", "purple",
    "yellow", "titanium", "gray", "grey", "bronze",
];

/// Keywords marking a non-new listing.
const REFURBISHED_MARKERS: &[&str] = &["refurbished", "renewed", "used", "open box"];

static RE_STORAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s?(gb|tb)").ok());

/// Extract matching attributes from a listing.
///
/// `price` is the normalized display string (possibly the unresolved
/// sentinel); the tier is computed only when it parses.
pub fn extract_descriptors(title: &str, content: &str, price: &str, store: &str) -> Descriptors {
    let text = format!("{title} {content}").to_lowercase();

    let color = COLORS
        .iter()
        .find(|c| text.contains(*c))
        .map(|c| capitalize(c));

    let storage = RE_STORAGE.as_ref().and_then(|re| {
        re.captures(&text)
            .map(|caps| format!("{}{}", &caps[1], caps[2].to_uppercase()))
    });

    let condition = if REFURBISHED_MARKERS.iter().any(|m| text.contains(m)) {
        Condition::Refurbished
    } else {
        Condition::New
    };

    let price_tier = parse_price(price).map(PriceTier::from_price);

    Descriptors {
        color,
        storage,
        condition,
        price_tier,
        store: store.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
