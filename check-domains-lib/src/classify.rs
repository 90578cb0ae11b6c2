//! Pattern-based classification of WHOIS response text.
//!
//! WHOIS responses are unstructured and vary by registry, so classification
//! scans for indicator patterns rather than parsing fields. The rule table is
//! evaluated in priority order: premium indicators outrank registration
//! indicators, because registries that auction a name still echo registrar
//! and date lines in the same response.
//!
//! `classify` is pure and deterministic, so the pattern set can be validated
//! without process execution or network access.

use crate::types::DomainStatus;
use lazy_static::lazy_static;
use regex::Regex;

/// One classification rule: if the pattern matches, the text classifies
/// as the associated status.
pub struct ClassifyRule {
    pub pattern: Regex,
    pub status: DomainStatus,
}

impl ClassifyRule {
    fn new(pattern: &str, status: DomainStatus) -> Self {
        Self {
            // Patterns are compile-time constants; a failure here is a bug
            // in the rule table, not a runtime condition.
            pattern: Regex::new(pattern).expect("invalid classification pattern"),
            status,
        }
    }
}

lazy_static! {
    /// Indicator patterns in evaluation order. Premium first.
    static ref RULES: Vec<ClassifyRule> = vec![
        ClassifyRule::new(
            r"(?i)premium|for sale|available for purchase",
            DomainStatus::Premium,
        ),
        ClassifyRule::new(r"(?i)registrar:", DomainStatus::Registered),
        ClassifyRule::new(r"(?i)creation date:", DomainStatus::Registered),
        ClassifyRule::new(r"(?i)registry expiry date:", DomainStatus::Registered),
        ClassifyRule::new(r"(?i)domain name:", DomainStatus::Registered),
        ClassifyRule::new(r"(?i)status: active", DomainStatus::Registered),
    ];
}

/// The rule table in evaluation order, for inspection and testing.
pub fn rules() -> &'static [ClassifyRule] {
    &RULES
}

/// Classify raw WHOIS output text.
///
/// Rules are checked in table order and the first match wins; text matching
/// no rule classifies as `Available`.
pub fn classify(raw_text: &str) -> DomainStatus {
    for rule in RULES.iter() {
        if rule.pattern.is_match(raw_text) {
            return rule.status;
        }
    }
    DomainStatus::Available
}
