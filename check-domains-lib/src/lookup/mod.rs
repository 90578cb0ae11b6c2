//! Lookup strategies for determining domain status.
//!
//! A `Lookup` is one strategy for resolving a domain's availability.
//! Strategies compose through `FallbackLookup`: the default checker stacks
//! the accurate-but-unreliable WHOIS tier over the fast DNS tier.

use crate::error::CheckError;
use crate::types::CheckResult;

mod dns;
mod whois;

pub use dns::DnsLookup;
pub use whois::WhoisLookup;

/// A single strategy for determining a domain's availability status.
///
/// An `Err` means the strategy could not produce a verdict at all (tool
/// missing, timeout) and a fallback tier should be consulted. A verdict of
/// "couldn't determine" is `Ok` with `DomainStatus::Unknown`.
#[allow(async_fn_in_trait)]
pub trait Lookup {
    async fn check(&self, domain: &str) -> Result<CheckResult, CheckError>;
}

/// Combines two lookups: try `primary`, and on any execution failure run
/// `secondary` instead.
pub struct FallbackLookup<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackLookup<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Lookup, S: Lookup> Lookup for FallbackLookup<P, S> {
    async fn check(&self, domain: &str) -> Result<CheckResult, CheckError> {
        match self.primary.check(domain).await {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::debug!(domain, error = %err, "primary lookup failed, falling back");
                self.secondary.check(domain).await
            }
        }
    }
}

// References borrow through to the underlying lookup, so tests and callers
// can share a strategy across combinators.
impl<L: Lookup> Lookup for &L {
    async fn check(&self, domain: &str) -> Result<CheckResult, CheckError> {
        <L as Lookup>::check(self, domain).await
    }
}
