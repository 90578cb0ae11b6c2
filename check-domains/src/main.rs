//! Check Domains CLI Application
//!
//! Checks domain-name availability for candidate project names across a
//! fixed set of common TLDs, using WHOIS classification with DNS fallback,
//! and prints a colorized streamed report plus a final summary.

mod ui;

use check_domains_lib::{
    load_env_config, normalize_name, summarize, validate_name, CheckConfig, DomainChecker,
    NameResults, RunResults,
};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::process;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for check-domains
#[derive(Parser, Debug)]
#[command(name = "check-domains")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check domain availability for project names across common TLDs")]
#[command(
    long_about = "Check domain availability for candidate project names.\n\nEach name is checked against .com, .app, .io, .ai, .dev, .tech, .xyz, .net and .org using WHOIS classification with a DNS resolution fallback."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Candidate project names to check (base names, without TLD)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Verbose logging (per-lookup timing and fallback decisions)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    if args.names.is_empty() {
        eprintln!("Error: please provide at least one name to check");
        eprintln!();
        eprintln!("Usage: check-domains <name> [name...]");
        process::exit(1);
    }

    // Backstop for anything the run loop lets escape. Lookup failures are
    // folded into results inside the library, so this should not trigger
    // under correct component behavior.
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Set up tracing output on stderr so stdout stays a clean report.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "check_domains_lib=debug,check_domains=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main run loop: sequential checks, streamed per-line output, one summary
/// pass at the end.
async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Reject malformed names up front, before any lookups run.
    for name in &args.names {
        validate_name(name)?;
    }

    let config = load_env_config(args.verbose).apply(CheckConfig::default());
    tracing::debug!(
        whois_timeout_secs = config.whois_timeout.as_secs(),
        tlds = config.tlds.len(),
        "configuration resolved"
    );
    let checker = DomainChecker::with_config(config.clone());
    let theme = ui::Theme::for_terminal();

    println!("{}", ui::format_header(&theme));

    let mut run_results = RunResults::new();

    // Outer loop: names in input order. Inner loop: TLDs in fixed order.
    // This ordering keeps streamed output deterministic and grouped per name.
    for name in &args.names {
        let base = normalize_name(name);
        println!("{}", ui::format_name_heading(&theme, &base));

        let mut name_results = NameResults::new();
        for tld in &config.tlds {
            let domain = format!("{}.{}", base, tld);
            let result = checker.check_domain(&domain).await;
            println!("{}", ui::format_result(&theme, &domain, &result));
            name_results.push(tld.clone(), result);
        }

        run_results.push(base, name_results);
    }

    let summaries = summarize(&run_results);
    print!("{}", ui::format_summary(&theme, &summaries));
    println!("{}", ui::format_footer(&theme));

    Ok(())
}
