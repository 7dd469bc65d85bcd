//! Shared price parsing.
//!
//! Prices travel through the pipeline as display strings ("$1,299.99" or
//! the `PRICE_UNRESOLVED` sentinel); every component that needs a numeric
//! value goes through [`parse_price`].

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::PRICE_UNRESOLVED;

static RE_NUMERIC: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\d,]+\.?\d*").ok());

/// Parse a numeric price out of a display string.
///
/// Accepts "$99.99", "99.99", "$1,234", "1,234.56 USD". Returns `None` for
/// the unresolved sentinel, empty strings, and anything without a digit run.
pub fn parse_price(price: &str) -> Option<f64> {
    let trimmed = price.trim();
    if trimmed.is_empty() || trimmed == PRICE_UNRESOLVED {
        return None;
    }

    let re = RE_NUMERIC.as_ref()?;
    let m = re.find(trimmed)?;
    m.as_str().replace(',', "").parse::<f64>().ok()
}

/// Canonical display form: two decimals, no thousands separators.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}
