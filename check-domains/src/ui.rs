//! Report rendering for the check-domains CLI.
//!
//! All colorization flows through an injected `Theme` rather than a global
//! color table, so rendering is testable with a plain theme and respects
//! terminals without color support.

use check_domains_lib::{CheckResult, DomainStatus, NameSummary};
use console::{pad_str, Alignment, Style};

/// Column width for the domain name in per-TLD result lines.
const DOMAIN_WIDTH: usize = 25;

const BANNER: &str = "═══════════════════════════════════════";

/// Style table injected into every rendering function.
pub struct Theme {
    /// Headers, banners and the Unknown status
    pub heading: Style,
    /// Available results
    pub good: Style,
    /// Registered results
    pub bad: Style,
    /// Premium results
    pub warn: Style,
    /// Method annotations and footer notes
    pub dim: Style,
}

impl Theme {
    /// Colored theme for capable terminals.
    pub fn colored() -> Self {
        Self {
            heading: Style::new().blue(),
            good: Style::new().green(),
            bad: Style::new().red(),
            warn: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    /// Style-free theme for pipes and NO_COLOR environments.
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            good: Style::new(),
            bad: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick a theme based on terminal color support.
    pub fn for_terminal() -> Self {
        if console::colors_enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Render the opening banner.
pub fn format_header(theme: &Theme) -> String {
    format!(
        "{}\n{}\n{}",
        theme.heading.apply_to(BANNER),
        theme.heading.apply_to("Domain Availability Checker"),
        theme.heading.apply_to(BANNER),
    )
}

/// Render the section heading for one candidate name.
pub fn format_name_heading(theme: &Theme, name: &str) -> String {
    format!("\n{}", theme.heading.apply_to(format!("Checking: {}", name)))
}

/// Render one checked domain as a report line.
///
/// The domain is left-justified to a fixed width for column alignment;
/// each status maps to exactly one icon and label, and the check method is
/// annotated in brackets. DNS error codes are appended for diagnostics.
pub fn format_result(theme: &Theme, domain: &str, result: &CheckResult) -> String {
    let padded = pad_str(domain, DOMAIN_WIDTH, Alignment::Left, None);

    let label = match result.status {
        DomainStatus::Available => theme.good.apply_to("✅ Available").to_string(),
        DomainStatus::Registered => theme.bad.apply_to("❌ Registered").to_string(),
        DomainStatus::Premium => theme.warn.apply_to("⚠️ Premium").to_string(),
        // DomainStatus is non-exhaustive; anything unrecognized renders
        // with the Unknown icon rather than failing.
        _ => theme.heading.apply_to("🔍 Unknown").to_string(),
    };

    let method = theme
        .dim
        .apply_to(format!("[{}]", result.method))
        .to_string();

    let mut line = format!("  {} {} {}", padded, label, method);

    if let Some(code) = &result.error_code {
        line.push(' ');
        line.push_str(&theme.dim.apply_to(format!("({})", code)).to_string());
    }

    line
}

/// Render the final summary section for all checked names.
pub fn format_summary(theme: &Theme, summaries: &[NameSummary]) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", theme.heading.apply_to(BANNER)));
    out.push_str(&format!("{}\n\n", theme.heading.apply_to("Summary")));

    for summary in summaries {
        out.push_str(&format!("{}:\n", theme.heading.apply_to(&summary.name)));

        if !summary.available.is_empty() {
            out.push_str(&format!(
                "  {} {}\n",
                theme.good.apply_to("Available:"),
                join_tlds(&summary.available),
            ));
        }

        if !summary.premium.is_empty() {
            out.push_str(&format!(
                "  {} {}\n",
                theme.warn.apply_to("Premium:"),
                join_tlds(&summary.premium),
            ));
        }

        if summary.all_registered() {
            out.push_str(&format!(
                "  {}\n",
                theme.bad.apply_to("All checked domains registered"),
            ));
        }

        out.push('\n');
    }

    out
}

/// Render the fixed advisory footer.
pub fn format_footer(theme: &Theme) -> String {
    format!(
        "{}\n{}",
        theme
            .dim
            .apply_to("Note: DNS checks may have false positives. Verify on registrar websites."),
        theme
            .dim
            .apply_to("Recommended registrars: Namecheap, Cloudflare, Porkbun"),
    )
}

fn join_tlds(tlds: &[String]) -> String {
    tlds.iter()
        .map(|t| format!(".{}", t))
        .collect::<Vec<_>>()
        .join(", ")
}
