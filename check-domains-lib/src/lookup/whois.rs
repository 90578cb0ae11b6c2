//! WHOIS tier: authoritative text lookup via the system `whois` command.
//!
//! This is the accurate-but-unreliable tier. Registries rate-limit WHOIS and
//! response formats vary, so every execution failure (tool missing, timeout,
//! non-zero exit) is an `Err` that sends the checker to the DNS fallback.

use crate::classify::classify;
use crate::error::CheckError;
use crate::lookup::Lookup;
use crate::types::{CheckMethod, CheckResult};
use std::time::{Duration, Instant};
use tokio::process::Command;

/// WHOIS lookup using the system's `whois` command-line tool.
#[derive(Clone)]
pub struct WhoisLookup {
    /// Timeout for each WHOIS query
    timeout: Duration,
}

impl WhoisLookup {
    /// Create a WHOIS lookup with the default 5 second timeout.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }

    /// Create a WHOIS lookup with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Execute the whois command and return its raw stdout text.
    async fn execute_whois(&self, domain: &str) -> Result<String, CheckError> {
        let output = Command::new("whois")
            .arg(domain)
            .output()
            .await
            .map_err(|e| {
                CheckError::whois(
                    domain,
                    format!(
                        "Failed to execute whois command: {}. Make sure 'whois' is installed.",
                        e
                    ),
                )
            })?;

        if !output.status.success() {
            return Err(CheckError::whois(
                domain,
                format!("whois exited with status {}", output.status),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Lookup for WhoisLookup {
    async fn check(&self, domain: &str) -> Result<CheckResult, CheckError> {
        let started = Instant::now();

        let result = tokio::time::timeout(self.timeout, self.execute_whois(domain)).await;

        let text = match result {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(CheckError::timeout("WHOIS query", self.timeout)),
        };

        let status = classify(&text);
        tracing::debug!(
            domain,
            ?status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "whois response classified"
        );

        Ok(CheckResult::new(status, CheckMethod::Whois))
    }
}

impl Default for WhoisLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whois_lookup_creation() {
        let lookup = WhoisLookup::new();
        assert_eq!(lookup.timeout, Duration::from_secs(5));

        let custom = WhoisLookup::with_timeout(Duration::from_secs(10));
        assert_eq!(custom.timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_missing_tool_is_an_error() {
        // Pointing PATH at an empty dir would be global state; instead rely
        // on a domain the tool rejects. If whois is absent entirely the
        // spawn error path returns Err as well, so either way the WHOIS
        // tier signals fallback rather than panicking.
        let lookup = WhoisLookup::with_timeout(Duration::from_millis(1));
        let result = lookup.check("acme.com").await;
        // 1ms always times out before any registry answers.
        assert!(result.is_err());
    }
}
