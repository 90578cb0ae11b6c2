//! Main domain checker implementation.
//!
//! `DomainChecker` orchestrates availability checking: WHOIS first for
//! accuracy, DNS resolution when WHOIS cannot answer. Its contract is that
//! checking never fails: every failure path folds into a `CheckResult`, so
//! one domain's timeout can never abort the checks for other domains.

use crate::lookup::{DnsLookup, FallbackLookup, Lookup, WhoisLookup};
use crate::types::{CheckConfig, CheckMethod, CheckResult, DomainStatus, NameResults};
use crate::utils::normalize_name;

/// Coordinates the layered check strategy over a configured TLD set.
///
/// # Example
///
/// ```rust,no_run
/// use check_domains_lib::DomainChecker;
///
/// #[tokio::main]
/// async fn main() {
///     let checker = DomainChecker::new();
///     let result = checker.check_domain("example.com").await;
///     println!("example.com is {}", result.status);
/// }
/// ```
pub struct DomainChecker<L = FallbackLookup<WhoisLookup, DnsLookup>> {
    /// Configuration settings for this checker instance
    config: CheckConfig,
    /// Lookup strategy, WHOIS-over-DNS by default
    lookup: L,
}

impl DomainChecker {
    /// Create a checker with default configuration: 5s WHOIS timeout,
    /// the fixed nine-TLD set, WHOIS with DNS fallback.
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a checker with custom configuration.
    pub fn with_config(config: CheckConfig) -> Self {
        let lookup = FallbackLookup::new(
            WhoisLookup::with_timeout(config.whois_timeout),
            DnsLookup::new(),
        );
        Self { config, lookup }
    }
}

impl Default for DomainChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lookup> DomainChecker<L> {
    /// Create a checker with a custom lookup strategy. This is the seam
    /// used by tests to substitute mock lookups for real network calls.
    pub fn with_lookup(config: CheckConfig, lookup: L) -> Self {
        Self { config, lookup }
    }

    /// Check availability of a single fully-qualified domain.
    ///
    /// Never fails: if every lookup tier errors out, the result is
    /// `Unknown` carrying the final error as its code.
    pub async fn check_domain(&self, domain: &str) -> CheckResult {
        match self.lookup.check(domain).await {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(domain, error = %err, "all lookup tiers failed");
                CheckResult::new(DomainStatus::Unknown, CheckMethod::Dns)
                    .with_error_code(err.to_string())
            }
        }
    }

    /// Check one candidate base name against every configured TLD,
    /// sequentially and in TLD order.
    ///
    /// The name is trimmed and case-folded before expansion.
    pub async fn check_name(&self, name: &str) -> NameResults {
        let base = normalize_name(name);
        let mut results = NameResults::new();

        for tld in &self.config.tlds {
            let domain = format!("{}.{}", base, tld);
            let result = self.check_domain(&domain).await;
            results.push(tld.clone(), result);
        }

        results
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }
}
