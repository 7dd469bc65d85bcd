//! Fact verification: every claim about a deal must trace back to a field
//! actually present on that deal.

use regex::Regex;
use std::sync::LazyLock;

use dealfinder_core::deal::Deal;
use dealfinder_core::price::parse_price;

/// Specification keywords a narrative may only mention when the deal's own
/// text carries them.
const SPEC_KEYWORDS: &[&str] = &[
    "storage", "ram", "memory", "processor", "cpu", "gpu", "screen", "display", "battery",
    "camera", "weight", "dimensions", "warranty",
];

/// Unqualified absolute language flagged in narratives.
const ABSOLUTE_WORDS: &[&str] = &[
    "always", "never", "every", "all", "none", "guaranteed", "certainly", "definitely",
];

static RE_DOLLAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").ok());
static RE_URL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"https?://\S+").ok());

/// Deal fields a claim can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactField {
    Price,
    Store,
    Rating,
    Storage,
    Color,
    Condition,
    Discount,
}

/// Claim outcome. Absence of the field yields `Unknown`, never a negative
/// claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimVerdict {
    Verified,
    Mismatch,
    Unknown,
}

/// Result of checking one claim against one deal.
#[derive(Debug, Clone)]
pub struct ClaimCheck {
    pub verdict: ClaimVerdict,
    pub verified: bool,
    pub actual_value: Option<String>,
    pub message: String,
}

impl ClaimCheck {
    fn verified(actual: String, message: String) -> Self {
        Self {
            verdict: ClaimVerdict::Verified,
            verified: true,
            actual_value: Some(actual),
            message,
        }
    }

    fn mismatch(actual: String, message: String) -> Self {
        Self {
            verdict: ClaimVerdict::Mismatch,
            verified: false,
            actual_value: Some(actual),
            message,
        }
    }

    fn unknown(message: String) -> Self {
        Self {
            verdict: ClaimVerdict::Unknown,
            verified: false,
            actual_value: None,
            message,
        }
    }
}

/// Severity of a narrative issue. Only high-severity issues fail
/// validation outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Kinds of narrative issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    PriceMismatch,
    UnverifiedSpecification,
    AbsoluteClaim,
    MissingCitation,
}

/// One problem found in a generated narrative.
#[derive(Debug, Clone)]
pub struct NarrativeIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
}

/// Outcome of validating a narrative against a deal.
#[derive(Debug, Clone)]
pub struct NarrativeReport {
    pub passes: bool,
    pub issues: Vec<NarrativeIssue>,
}

/// Validates claims and narratives against a deal's structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactVerifier;

impl FactVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Check a single claimed value against the deal.
    ///
    /// Matching is case-insensitive and substring-tolerant; prices compare
    /// numerically when both sides parse.
    pub fn verify_claim(&self, field: FactField, claimed: &str, deal: &Deal) -> ClaimCheck {
        match field {
            FactField::Price => self.verify_price(claimed, deal),
            FactField::Store => check_text(
                "store",
                claimed,
                (!deal.store.is_empty() && deal.store != "Unknown Store")
                    .then(|| deal.store.clone()),
            ),
            FactField::Rating => check_text(
                "rating",
                claimed,
                deal.rating.map(|r| format!("{r}")),
            ),
            FactField::Storage => {
                check_text("storage", claimed, deal.descriptors.storage.clone())
            }
            FactField::Color => check_text("color", claimed, deal.descriptors.color.clone()),
            FactField::Condition => check_text(
                "condition",
                claimed,
                Some(deal.descriptors.condition.to_string()),
            ),
            FactField::Discount => check_text("discount", claimed, deal.discount.clone()),
        }
    }

    fn verify_price(&self, claimed: &str, deal: &Deal) -> ClaimCheck {
        let Some(actual) = deal.price_value() else {
            return ClaimCheck::unknown("price not specified in source".to_string());
        };

        match parse_price(claimed) {
            Some(value) if (value - actual).abs() < 0.005 => ClaimCheck::verified(
                deal.price.clone(),
                format!("price verified: {}", deal.price),
            ),
            _ => ClaimCheck::mismatch(
                deal.price.clone(),
                format!("price mismatch: claimed {claimed}, actual {}", deal.price),
            ),
        }
    }

    /// Scan a generated narrative for unsupported content.
    ///
    /// High-severity issues (price mismatch) fail validation outright;
    /// medium/low issues are reported so a caller can regenerate under
    /// stricter constraints.
    pub fn validate_narrative(&self, text: &str, deal: &Deal) -> NarrativeReport {
        let mut issues = Vec::new();
        let text_lower = text.to_lowercase();

        // (a) Dollar amounts that contradict the recorded price.
        if let (Some(re), Some(actual)) = (RE_DOLLAR.as_ref(), deal.price_value()) {
            for m in re.find_iter(text) {
                if let Some(mentioned) = parse_price(m.as_str()) {
                    if (mentioned - actual).abs() >= 0.005 {
                        issues.push(NarrativeIssue {
                            kind: IssueKind::PriceMismatch,
                            severity: Severity::High,
                            message: format!(
                                "narrative mentions price {} but source has {}",
                                m.as_str(),
                                deal.price
                            ),
                        });
                    }
                }
            }
        }

        // (b) Specification keywords absent from the deal's own text.
        let source_text = format!(
            "{} {} {:?}",
            deal.title.to_lowercase(),
            deal.content.to_lowercase(),
            deal.descriptors
        )
        .to_lowercase();
        for keyword in SPEC_KEYWORDS {
            if text_lower.contains(keyword) && !source_text.contains(keyword) {
                issues.push(NarrativeIssue {
                    kind: IssueKind::UnverifiedSpecification,
                    severity: Severity::Medium,
                    message: format!("narrative mentions \"{keyword}\" but it is not in the source"),
                });
            }
        }

        // (c) Unqualified absolute language.
        for word in ABSOLUTE_WORDS {
            if text_lower.split_whitespace().any(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric()) == *word
            }) {
                issues.push(NarrativeIssue {
                    kind: IssueKind::AbsoluteClaim,
                    severity: Severity::Low,
                    message: format!("narrative contains absolute word \"{word}\""),
                });
            }
        }

        // (d) No source citation although the deal carries a URL.
        let has_url = RE_URL
            .as_ref()
            .map(|re| re.is_match(text))
            .unwrap_or(false);
        if !has_url && !deal.url.is_empty() {
            issues.push(NarrativeIssue {
                kind: IssueKind::MissingCitation,
                severity: Severity::Medium,
                message: "narrative lacks a source URL citation".to_string(),
            });
        }

        let passes = !issues.iter().any(|i| i.severity == Severity::High);
        NarrativeReport { passes, issues }
    }

    /// The deal's source-traceable fact sheet: only fields actually
    /// present, each tagged, with the source URL.
    pub fn fact_sheet(&self, deal: &Deal) -> String {
        let mut lines = Vec::new();

        if deal.has_price() {
            lines.push(format!("Price: {} [verified]", deal.price));
        } else {
            lines.push("Price: not specified in listing".to_string());
        }

        if !deal.store.is_empty() && deal.store != "Unknown Store" {
            lines.push(format!("Store: {} [verified]", deal.store));
        }

        if let Some(rating) = deal.rating {
            lines.push(format!("Rating: {rating}/5 [verified]"));
        }

        if let Some(storage) = &deal.descriptors.storage {
            lines.push(format!("Storage: {storage} [verified]"));
        }

        if let Some(color) = &deal.descriptors.color {
            lines.push(format!("Color: {color} [verified]"));
        }

        lines.push(format!("Condition: {} [verified]", deal.descriptors.condition));

        if let Some(discount) = &deal.discount {
            lines.push(format!("Discount: {discount} [verified]"));
        }

        if !deal.url.is_empty() {
            lines.push(format!("Source: {}", deal.url));
        }

        lines.join("\n")
    }
}

fn check_text(field_name: &str, claimed: &str, actual: Option<String>) -> ClaimCheck {
    let Some(actual) = actual else {
        return ClaimCheck::unknown(format!("{field_name} not specified in source"));
    };

    let claimed_norm = claimed.to_lowercase();
    let claimed_norm = claimed_norm.trim();
    let actual_norm = actual.to_lowercase();
    let actual_norm = actual_norm.trim();

    if claimed_norm == actual_norm
        || claimed_norm.contains(actual_norm)
        || actual_norm.contains(claimed_norm)
    {
        ClaimCheck::verified(actual.clone(), format!("{field_name} verified: {actual}"))
    } else {
        ClaimCheck::mismatch(
            actual.clone(),
            format!("{field_name} mismatch: claimed {claimed}, actual {actual}"),
        )
    }
}
