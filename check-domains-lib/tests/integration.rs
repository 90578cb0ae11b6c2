// check-domains-lib/tests/integration.rs

//! End-to-end checks of the public API with mocked lookup tiers.
//!
//! Real WHOIS and DNS calls are rate-limited and nondeterministic, so these
//! tests substitute mock `Lookup` implementations at the checker's lookup
//! seam and assert on classification, fallback, ordering and aggregation.

use check_domains_lib::{
    classify, summarize, CheckConfig, CheckError, CheckMethod, CheckResult, DomainChecker,
    DomainStatus, FallbackLookup, Lookup, RunResults,
};

/// Lookup that always answers with the same status.
struct FixedLookup {
    status: DomainStatus,
    method: CheckMethod,
}

impl Lookup for FixedLookup {
    async fn check(&self, _domain: &str) -> Result<CheckResult, CheckError> {
        Ok(CheckResult::new(self.status, self.method))
    }
}

/// Lookup that always fails, standing in for a missing/timed-out whois tool.
struct FailingLookup;

impl Lookup for FailingLookup {
    async fn check(&self, domain: &str) -> Result<CheckResult, CheckError> {
        Err(CheckError::whois(domain, "simulated whois failure"))
    }
}

/// Lookup that classifies canned WHOIS text, exercising the same pattern
/// path as the real WHOIS tier without spawning a process.
struct CannedWhois {
    text: &'static str,
}

impl Lookup for CannedWhois {
    async fn check(&self, _domain: &str) -> Result<CheckResult, CheckError> {
        Ok(CheckResult::new(classify(self.text), CheckMethod::Whois))
    }
}

#[tokio::test]
async fn test_whois_tier_answers_without_fallback() {
    let lookup = FallbackLookup::new(
        CannedWhois {
            text: "Registrar: Example Registrar\nCreation Date: 2020-01-01",
        },
        FixedLookup {
            status: DomainStatus::Available,
            method: CheckMethod::Dns,
        },
    );
    let checker = DomainChecker::with_lookup(CheckConfig::default(), lookup);

    let result = checker.check_domain("acme.com").await;
    assert_eq!(result.status, DomainStatus::Registered);
    assert_eq!(result.method, CheckMethod::Whois);
}

#[tokio::test]
async fn test_whois_failure_falls_back_to_dns() {
    let lookup = FallbackLookup::new(
        FailingLookup,
        FixedLookup {
            status: DomainStatus::Available,
            method: CheckMethod::Dns,
        },
    );
    let checker = DomainChecker::with_lookup(CheckConfig::default(), lookup);

    let result = checker.check_domain("acme.com").await;
    assert_eq!(result.status, DomainStatus::Available);
    assert_eq!(result.method, CheckMethod::Dns);
}

#[tokio::test]
async fn test_total_failure_folds_into_unknown() {
    let lookup = FallbackLookup::new(FailingLookup, FailingLookup);
    let checker = DomainChecker::with_lookup(CheckConfig::default(), lookup);

    // check_domain never fails; both tiers erroring yields Unknown with
    // the final error preserved as the code.
    let result = checker.check_domain("acme.com").await;
    assert_eq!(result.status, DomainStatus::Unknown);
    assert!(result
        .error_code
        .as_deref()
        .unwrap()
        .contains("simulated whois failure"));
}

#[tokio::test]
async fn test_premium_text_wins_over_registered_markers() {
    let lookup = CannedWhois {
        text: "Domain Name: ACME.IO\nRegistrar: Foo\nThis premium domain is for sale",
    };
    let checker = DomainChecker::with_lookup(CheckConfig::default(), lookup);

    let result = checker.check_domain("acme.io").await;
    assert_eq!(result.status, DomainStatus::Premium);
}

#[tokio::test]
async fn test_check_name_covers_all_tlds_in_order() {
    let lookup = FixedLookup {
        status: DomainStatus::Registered,
        method: CheckMethod::Whois,
    };
    let checker = DomainChecker::with_lookup(CheckConfig::default(), lookup);

    let results = checker.check_name("  Acme ").await;
    assert_eq!(results.len(), 9);

    let tlds: Vec<&str> = results.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        tlds,
        vec!["com", "app", "io", "ai", "dev", "tech", "xyz", "net", "org"]
    );
    assert!(results
        .iter()
        .all(|(_, r)| r.status == DomainStatus::Registered));
}

#[tokio::test]
async fn test_all_registered_run_summarizes_as_all_registered() {
    let lookup = FixedLookup {
        status: DomainStatus::Registered,
        method: CheckMethod::Whois,
    };
    let checker = DomainChecker::with_lookup(CheckConfig::default(), lookup);

    let mut run = RunResults::new();
    run.push("acme", checker.check_name("acme").await);

    let summaries = summarize(&run);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "acme");
    assert!(summaries[0].all_registered());
}

#[tokio::test]
async fn test_two_names_keep_input_order_with_independent_buckets() {
    let available = DomainChecker::with_lookup(
        CheckConfig::default(),
        FixedLookup {
            status: DomainStatus::Available,
            method: CheckMethod::Dns,
        },
    );
    let registered = DomainChecker::with_lookup(
        CheckConfig::default(),
        FixedLookup {
            status: DomainStatus::Registered,
            method: CheckMethod::Whois,
        },
    );

    let mut run = RunResults::new();
    run.push("zebra", available.check_name("zebra").await);
    run.push("acme", registered.check_name("acme").await);

    let summaries = summarize(&run);
    assert_eq!(summaries[0].name, "zebra");
    assert_eq!(summaries[0].available.len(), 9);
    assert_eq!(summaries[1].name, "acme");
    assert!(summaries[1].all_registered());
}

#[tokio::test]
async fn test_custom_tld_list_respected() {
    let lookup = FixedLookup {
        status: DomainStatus::Available,
        method: CheckMethod::Dns,
    };
    let config = CheckConfig::default().with_tlds(vec!["com".to_string(), "io".to_string()]);
    let checker = DomainChecker::with_lookup(config, lookup);

    let results = checker.check_name("acme").await;
    let tlds: Vec<&str> = results.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tlds, vec!["com", "io"]);
}
