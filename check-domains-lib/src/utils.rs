//! Helpers for candidate name normalization and validation.

use crate::error::CheckError;

/// Normalize a candidate base name: trim surrounding whitespace and
/// case-fold to lowercase. Domain labels are case-insensitive, so this
/// keeps expanded domains and report output consistent.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate a candidate base name before it is expanded with TLDs.
///
/// Names must be at least two characters of alphanumerics and hyphens,
/// without a leading or trailing hyphen. Anything else would be rejected
/// by registries anyway, so it fails fast with a user-facing error.
pub fn validate_name(name: &str) -> Result<(), CheckError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(CheckError::invalid_name(name, "name cannot be empty"));
    }

    if name.len() < 2 {
        return Err(CheckError::invalid_name(name, "name too short"));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(CheckError::invalid_name(
            name,
            "name cannot start or end with a hyphen",
        ));
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(CheckError::invalid_name(
            name,
            "only letters, digits and hyphens are allowed",
        ));
    }

    Ok(())
}
