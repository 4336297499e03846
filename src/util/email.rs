//! Email shape validation.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::OnceLock;

use regex::Regex;

/// Compiled on first use and reused by every check after that.
static EMAIL_SHAPE: OnceLock<Option<Regex>> = OnceLock::new();

/// Check that an address looks like `local@domain.tld`: one `@`, no
/// whitespace, and at least one dot in the domain part.
///
/// This is a shape check only; deliverability is the server's problem.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .map_or(false, |re| re.is_match(email))
}
