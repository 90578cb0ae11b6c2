//! # Check Domains Library
//!
//! Domain availability checking for candidate project names, using a layered
//! strategy: authoritative WHOIS text lookup with pattern classification,
//! falling back to DNS IPv4 resolution when WHOIS cannot answer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use check_domains_lib::{summarize, DomainChecker, RunResults};
//!
//! #[tokio::main]
//! async fn main() {
//!     let checker = DomainChecker::new();
//!
//!     let mut run = RunResults::new();
//!     run.push("acme", checker.check_name("acme").await);
//!
//!     for summary in summarize(&run) {
//!         println!("{}: {} TLDs available", summary.name, summary.available.len());
//!     }
//! }
//! ```
//!
//! ## Design
//!
//! - **WHOIS tier**: accurate but slow and rate-limited; classified by a
//!   fixed, priority-ordered pattern table (premium indicators first).
//! - **DNS tier**: fast, universally available fallback with a documented
//!   false-positive/negative risk.
//! - **Never-failing checks**: every failure path resolves to a
//!   `CheckResult`, so one domain's timeout cannot abort a run.

// Re-export main public API types and functions
pub use checker::DomainChecker;
pub use classify::{classify, rules, ClassifyRule};
pub use config::{load_env_config, EnvConfig};
pub use error::CheckError;
pub use lookup::{DnsLookup, FallbackLookup, Lookup, WhoisLookup};
pub use summary::{summarize, NameSummary};
pub use types::{
    default_tlds, CheckConfig, CheckMethod, CheckResult, DomainStatus, NameResults, RunResults,
    DEFAULT_TLDS,
};
pub use utils::{normalize_name, validate_name};

// Internal modules
mod checker;
mod classify;
mod config;
mod error;
mod lookup;
mod summary;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, CheckError>;

// Library version for display purposes
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
