//! Final-pass aggregation of run results.
//!
//! Partitions each candidate name's TLD results into "available" and
//! "premium" buckets for the closing digest. Name order follows input
//! order; TLD order inside each bucket follows checking order.

use crate::types::{DomainStatus, RunResults};

/// Per-name digest: which TLDs came back available or premium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSummary {
    pub name: String,
    pub available: Vec<String>,
    pub premium: Vec<String>,
}

impl NameSummary {
    /// True when no TLD for this name is available or premium, i.e. the
    /// digest should report everything as registered.
    pub fn all_registered(&self) -> bool {
        self.available.is_empty() && self.premium.is_empty()
    }
}

/// Build per-name summaries from a completed run.
///
/// Names appear in first-seen order; TLDs within each bucket keep the
/// order they were checked in.
pub fn summarize(results: &RunResults) -> Vec<NameSummary> {
    results
        .iter()
        .map(|(name, name_results)| {
            let mut available = Vec::new();
            let mut premium = Vec::new();

            for (tld, result) in name_results.iter() {
                match result.status {
                    DomainStatus::Available => available.push(tld.clone()),
                    DomainStatus::Premium => premium.push(tld.clone()),
                    _ => {}
                }
            }

            NameSummary {
                name: name.clone(),
                available,
                premium,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CheckMethod, CheckResult, NameResults};

    fn result(status: DomainStatus) -> CheckResult {
        CheckResult::new(status, CheckMethod::Whois)
    }

    fn name_results(pairs: &[(&str, DomainStatus)]) -> NameResults {
        let mut results = NameResults::new();
        for (tld, status) in pairs {
            results.push(*tld, result(*status));
        }
        results
    }

    #[test]
    fn test_partition_buckets() {
        let mut run = RunResults::new();
        run.push(
            "acme",
            name_results(&[
                ("com", DomainStatus::Registered),
                ("app", DomainStatus::Available),
                ("io", DomainStatus::Premium),
                ("ai", DomainStatus::Unknown),
                ("dev", DomainStatus::Available),
            ]),
        );

        let summaries = summarize(&run);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].available, vec!["app", "dev"]);
        assert_eq!(summaries[0].premium, vec!["io"]);
        assert!(!summaries[0].all_registered());
    }

    #[test]
    fn test_all_registered() {
        let mut run = RunResults::new();
        run.push(
            "acme",
            name_results(&[
                ("com", DomainStatus::Registered),
                ("io", DomainStatus::Registered),
            ]),
        );

        let summaries = summarize(&run);
        assert!(summaries[0].all_registered());
        assert!(summaries[0].available.is_empty());
        assert!(summaries[0].premium.is_empty());
    }

    #[test]
    fn test_unknown_is_not_available() {
        // Unknown results land in neither bucket; a name with only
        // Registered and Unknown checks reports as all-registered.
        let mut run = RunResults::new();
        run.push(
            "acme",
            name_results(&[
                ("com", DomainStatus::Registered),
                ("io", DomainStatus::Unknown),
            ]),
        );

        assert!(summarize(&run)[0].all_registered());
    }

    #[test]
    fn test_name_order_preserved() {
        let mut run = RunResults::new();
        run.push("zeta", name_results(&[("com", DomainStatus::Available)]));
        run.push("acme", name_results(&[("com", DomainStatus::Available)]));

        let summaries = summarize(&run);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "acme"]);
    }

    #[test]
    fn test_tld_order_preserved_within_buckets() {
        let mut run = RunResults::new();
        run.push(
            "acme",
            name_results(&[
                ("xyz", DomainStatus::Available),
                ("com", DomainStatus::Available),
                ("app", DomainStatus::Premium),
                ("io", DomainStatus::Premium),
            ]),
        );

        let summaries = summarize(&run);
        // Checking order wins, not alphabetical order.
        assert_eq!(summaries[0].available, vec!["xyz", "com"]);
        assert_eq!(summaries[0].premium, vec!["app", "io"]);
    }
}
