//! Environment-variable configuration.
//!
//! The tool's surface is deliberately small: the TLD set is fixed and there
//! are no tuning flags. The one operational knob, the WHOIS timeout, can be
//! overridden via `CD_WHOIS_TIMEOUT` (seconds, an optional trailing `s` is
//! accepted). Invalid values are ignored with a warning in verbose mode.

use crate::types::CheckConfig;
use std::time::Duration;

/// Settings read from `CD_*` environment variables.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    /// Override for the per-lookup WHOIS timeout
    pub whois_timeout: Option<Duration>,
}

impl EnvConfig {
    /// Apply these settings on top of an existing configuration.
    pub fn apply(&self, mut config: CheckConfig) -> CheckConfig {
        if let Some(timeout) = self.whois_timeout {
            config.whois_timeout = timeout;
        }
        config
    }
}

/// Load configuration from the environment.
pub fn load_env_config(verbose: bool) -> EnvConfig {
    let mut config = EnvConfig::default();

    if let Ok(raw) = std::env::var("CD_WHOIS_TIMEOUT") {
        match parse_timeout_secs(&raw) {
            Some(secs) => config.whois_timeout = Some(Duration::from_secs(secs)),
            None => {
                if verbose {
                    eprintln!("Warning: ignoring invalid CD_WHOIS_TIMEOUT value '{}'", raw);
                }
            }
        }
    }

    config
}

/// Parse a timeout like "5" or "5s" into whole seconds. Zero is rejected:
/// a zero timeout would fail every WHOIS lookup before it starts.
fn parse_timeout_secs(raw: &str) -> Option<u64> {
    let trimmed = raw.trim().trim_end_matches(['s', 'S']);
    match trimmed.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => None,
    }
}
