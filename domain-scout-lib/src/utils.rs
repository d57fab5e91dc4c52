//! Utility functions for domain name validation.
//!
//! Validation covers the name part only, never the TLD; TLDs go through
//! the zone registry instead.

use crate::error::ScanError;

lazy_static::lazy_static! {
    // First and last characters alphanumeric, up to 61 alphanumeric/hyphen
    // characters between them; 63-character label limit overall.
    static ref NAME_RE: regex::Regex =
        regex::Regex::new("^[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$").unwrap();
}

/// Validate a candidate base name (without TLD).
///
/// Accepts lowercase alphanumeric names with interior hyphens, 2 to 63
/// characters. Single-character names are a real registry concept but most
/// zones reserve them, so they are rejected here.
pub fn validate_name(name: &str) -> Result<(), ScanError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ScanError::invalid_domain(name, "name cannot be empty"));
    }

    if !NAME_RE.is_match(name) {
        return Err(ScanError::invalid_domain(
            name,
            "must be 2-63 lowercase alphanumeric characters, hyphens only in the interior",
        ));
    }

    Ok(())
}

/// Check a base name without constructing an error.
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}
