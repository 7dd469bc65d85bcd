use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category driving the freshness TTL policy.
///
/// Classification is a first-match keyword lookup owned by the freshness
/// engine; this type only names the buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Gaming,
    Fashion,
    Software,
    Home,
    Sports,
    Books,
    #[default]
    Default,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Electronics => "electronics",
            Self::Gaming => "gaming",
            Self::Fashion => "fashion",
            Self::Software => "software",
            Self::Home => "home",
            Self::Sports => "sports",
            Self::Books => "books",
            Self::Default => "default",
        };
        write!(f, "{name}")
    }
}
