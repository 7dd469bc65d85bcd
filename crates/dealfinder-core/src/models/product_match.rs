use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deal::Deal;

/// Which resolution strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    ExactNumber,
    Name,
    Attribute,
    Description,
    Semantic,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ExactNumber => "exact_number",
            Self::Name => "name",
            Self::Attribute => "attribute",
            Self::Description => "description",
            Self::Semantic => "semantic",
        };
        write!(f, "{name}")
    }
}

/// One candidate answer to "which deal did the user mean?".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMatch {
    pub result_number: u32,
    /// [0, 1]; 1.0 only for exact number references.
    pub confidence: f64,
    pub reasoning: String,
    pub match_type: MatchType,
    /// Competing deals, populated only when the resolution is ambiguous.
    pub alternatives: Vec<Deal>,
}

/// Terminal output of the reference resolver. Ambiguity is a valid state
/// requiring user clarification, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// Surviving matches, highest confidence first.
    pub matches: Vec<ProductMatch>,
    pub is_ambiguous: bool,
    /// Generated clarification prompt, present iff ambiguous.
    pub clarification: Option<String>,
}

impl Resolution {
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            is_ambiguous: false,
            clarification: None,
        }
    }

    /// The single committed match, when resolution was unambiguous.
    pub fn committed(&self) -> Option<&ProductMatch> {
        if self.is_ambiguous {
            None
        } else {
            self.matches.first()
        }
    }
}
