//! Fixed policy tables: category keywords, price-sensitive phrases, and
//! per-category TTLs.

use dealfinder_core::models::Category;

/// Absolute ceiling. Any cached entry at or past this age is expired,
/// overriding every category TTL.
pub const MAX_DEAL_AGE_HOURS: f64 = 24.0;

/// Under this age a cached set is fresh.
pub const FRESH_THRESHOLD_HOURS: f64 = 4.0;

/// Under this age a cached set is good quality.
pub const GOOD_THRESHOLD_HOURS: f64 = 12.0;

/// Price-sensitive queries are capped at the electronics-tier TTL
/// regardless of detected category.
pub const PRICE_SENSITIVE_CAP_HOURS: u64 = 4;

/// Category keyword tables, checked in this order; first match wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Electronics,
        &[
            "iphone", "macbook", "laptop", "computer", "tablet", "phone", "tv", "camera",
            "headphones",
        ],
    ),
    (
        Category::Gaming,
        &["nintendo", "playstation", "xbox", "switch", "ps5", "game", "gaming"],
    ),
    (
        Category::Fashion,
        &["shoes", "clothing", "shirt", "pants", "dress", "jacket", "jeans"],
    ),
    (
        Category::Software,
        &["software", "app", "license", "subscription", "microsoft", "adobe"],
    ),
    (
        Category::Home,
        &["furniture", "kitchen", "appliance", "bed", "chair", "table"],
    ),
    (
        Category::Sports,
        &["sports", "fitness", "gym", "workout", "running", "bike"],
    ),
];

/// Phrases marking a query as price-sensitive (shorter TTL).
pub const PRICE_SENSITIVE_PHRASES: &[&str] = &[
    "cheapest",
    "lowest price",
    "best deal",
    "discount",
    "sale",
    "clearance",
    "bargain",
    "hot deal",
    "limited time",
    "cheap",
    "affordable",
    "budget",
    "markdown",
    "reduced",
    "best price",
];

/// Category TTL in hours. Electronics reprice fastest; books barely move.
pub fn ttl_hours(category: Category) -> u64 {
    match category {
        Category::Electronics => 4,
        Category::Software => 6,
        Category::Gaming => 8,
        Category::Sports => 12,
        Category::Fashion => 12,
        Category::Home => 16,
        Category::Books => 24,
        Category::Default => 24,
    }
}
