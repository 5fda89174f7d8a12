//! Email address validation for the lead-capture form.

use once_cell::sync::Lazy;
use regex::Regex;

/// One `@`, no whitespace, and a dot somewhere after the `@`.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Loose syntactic check, the same one the form applies before posting.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
