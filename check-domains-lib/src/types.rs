//! Core data types for domain availability checking.
//!
//! This module defines the main data structures used throughout the library:
//! check results, the status taxonomy, configuration options, and the
//! ordered per-name / per-run result collections.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The fixed TLD set checked for every candidate name, ordered by
/// preference for tech products. Constant for the process lifetime.
pub const DEFAULT_TLDS: [&str; 9] = ["com", "app", "io", "ai", "dev", "tech", "xyz", "net", "org"];

/// The default TLD set as owned strings, in checking order.
pub fn default_tlds() -> Vec<String> {
    DEFAULT_TLDS.iter().map(|t| (*t).to_string()).collect()
}

/// Availability status of a checked domain.
///
/// Marked `#[non_exhaustive]` so downstream renderers must carry a
/// defensive default arm instead of assuming the taxonomy is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DomainStatus {
    /// No registration indicators found; the domain looks registrable.
    #[serde(rename = "available")]
    Available,

    /// Registration indicators found, or the domain resolves in DNS.
    #[serde(rename = "registered")]
    Registered,

    /// The registry lists the name as a premium / for-sale domain.
    #[serde(rename = "premium")]
    Premium,

    /// Status could not be determined.
    #[serde(rename = "unknown")]
    Unknown,
}

/// Method used to determine a domain's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckMethod {
    /// Authoritative WHOIS text lookup with pattern classification
    #[serde(rename = "whois")]
    Whois,

    /// DNS IPv4 resolution fallback
    #[serde(rename = "dns")]
    Dns,
}

/// Result of a single domain availability check.
///
/// Immutable once produced. Every failure path in the checker resolves to
/// one of these rather than an error; `error_code` carries the underlying
/// resolver error for `Unknown` results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Classified availability status
    pub status: DomainStatus,

    /// Which check tier produced this result
    pub method: CheckMethod,

    /// Underlying error code for diagnostic display (Unknown results only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CheckResult {
    /// Create a result with no error code.
    pub fn new(status: DomainStatus, method: CheckMethod) -> Self {
        Self {
            status,
            method,
            error_code: None,
        }
    }

    /// Attach the underlying error code for diagnostic display.
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }
}

/// Configuration options for domain checking operations.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Timeout for each WHOIS lookup. A timed-out lookup falls back to
    /// DNS, it never aborts the run.
    /// Default: 5 seconds
    pub whois_timeout: Duration,

    /// TLDs checked per candidate name, in output order.
    /// Default: the fixed nine-entry set
    pub tlds: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            whois_timeout: Duration::from_secs(5),
            tlds: default_tlds(),
        }
    }
}

impl CheckConfig {
    /// Set a custom WHOIS timeout.
    pub fn with_whois_timeout(mut self, timeout: Duration) -> Self {
        self.whois_timeout = timeout;
        self
    }

    /// Set the TLDs to check per candidate name.
    pub fn with_tlds(mut self, tlds: Vec<String>) -> Self {
        self.tlds = tlds;
        self
    }
}

/// Per-name results: one `CheckResult` per TLD, in checking order.
///
/// Built incrementally during a run, read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameResults {
    checks: Vec<(String, CheckResult)>,
}

impl NameResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the result for one TLD. Order of insertion is preserved.
    pub fn push(&mut self, tld: impl Into<String>, result: CheckResult) {
        self.checks.push((tld.into(), result));
    }

    /// Iterate (tld, result) pairs in checking order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, CheckResult)> {
        self.checks.iter()
    }

    /// Look up the result for a specific TLD.
    pub fn get(&self, tld: &str) -> Option<&CheckResult> {
        self.checks
            .iter()
            .find(|(t, _)| t == tld)
            .map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// All results for a run, keyed by candidate name in first-seen order.
///
/// Appended to while checking, consumed once by the summary pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResults {
    entries: Vec<(String, NameResults)>,
}

impl RunResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the results for one candidate name.
    pub fn push(&mut self, name: impl Into<String>, results: NameResults) {
        self.entries.push((name.into(), results));
    }

    /// Iterate (name, results) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, NameResults)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainStatus::Available => write!(f, "available"),
            DomainStatus::Registered => write!(f, "registered"),
            DomainStatus::Premium => write!(f, "premium"),
            DomainStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMethod::Whois => write!(f, "whois"),
            CheckMethod::Dns => write!(f, "dns"),
        }
    }
}
