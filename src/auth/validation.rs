//! Credential shape validation.

use once_cell::sync::Lazy;
use regex::Regex;

// Intentionally permissive after the '@': any non-empty domain part passes,
// including one without a dot. Tightening this would reject identifiers the
// service has always accepted.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@.+$").expect("compile email regex"));

/// Whether the login identifier looks like an email address.
pub fn is_email_shaped(identifier: &str) -> bool {
    EMAIL_REGEX.is_match(identifier)
}
