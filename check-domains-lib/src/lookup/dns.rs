//! DNS tier: IPv4 resolution as the universal fallback.
//!
//! Fast and always available, with known accuracy limits: a registered
//! domain without an A record looks available, and a parked placeholder
//! record looks registered. That tradeoff is accepted by design.
//!
//! This tier never returns an execution error. Resolution outcomes map to:
//! - records found        -> Registered
//! - name not found       -> Available
//! - any other failure    -> Unknown, with the resolver error preserved

use crate::error::CheckError;
use crate::lookup::Lookup;
use crate::types::{CheckMethod, CheckResult, DomainStatus};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;

/// DNS lookup backed by the resolver's public-DNS defaults.
pub struct DnsLookup {
    resolver: TokioAsyncResolver,
}

impl DnsLookup {
    pub fn new() -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(
                ResolverConfig::default(),
                ResolverOpts::default(),
            ),
        }
    }
}

impl Lookup for DnsLookup {
    async fn check(&self, domain: &str) -> Result<CheckResult, CheckError> {
        match self.resolver.ipv4_lookup(domain).await {
            Ok(_) => Ok(CheckResult::new(
                DomainStatus::Registered,
                CheckMethod::Dns,
            )),
            Err(err) => match err.kind() {
                // NXDOMAIN and no-records both count as the "name not found"
                // class: a valid availability signal, not an error.
                ResolveErrorKind::NoRecordsFound { .. } => Ok(CheckResult::new(
                    DomainStatus::Available,
                    CheckMethod::Dns,
                )),
                _ => {
                    tracing::debug!(domain, error = %err, "dns resolution errored");
                    Ok(
                        CheckResult::new(DomainStatus::Unknown, CheckMethod::Dns)
                            .with_error_code(error_code(&err)),
                    )
                }
            },
        }
    }
}

impl Default for DnsLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Short diagnostic code for a resolver error. Timeouts, socket errors and
/// protocol errors get stable codes; anything else keeps its message.
fn error_code(err: &ResolveError) -> String {
    match err.kind() {
        ResolveErrorKind::Timeout => "timeout".to_string(),
        ResolveErrorKind::Io(_) => "io".to_string(),
        ResolveErrorKind::Proto(_) => "proto".to_string(),
        _ => err.to_string(),
    }
}
