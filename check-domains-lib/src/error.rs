//! Error handling for domain checking operations.
//!
//! Most lookup failures are recovered internally (WHOIS failure falls back
//! to DNS, DNS errors fold into an `Unknown` result), so these errors rarely
//! escape the checker. They surface for invalid input and as the backstop
//! when every tier fails.

use std::fmt;

/// Main error type for domain checking operations.
#[derive(Debug, Clone)]
pub enum CheckError {
    /// Invalid candidate name or domain format
    InvalidName {
        name: String,
        reason: String,
    },

    /// WHOIS lookup failures (tool unavailable, non-zero exit)
    WhoisError {
        domain: String,
        message: String,
    },

    /// Timeout errors when a lookup takes too long
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// Configuration errors (invalid settings, etc.)
    ConfigError {
        message: String,
    },

    /// Generic internal errors that don't fit other categories
    Internal {
        message: String,
    },
}

impl CheckError {
    /// Create a new invalid name error.
    pub fn invalid_name<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new WHOIS error.
    pub fn whois<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Self::WhoisError {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name, reason } => {
                write!(f, "Invalid name '{}': {}", name, reason)
            }
            Self::WhoisError { domain, message } => {
                write!(f, "WHOIS error for '{}': {}", domain, message)
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for CheckError {}

impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
