//! Character variety sections - uppercase, lowercase, digits, special chars.
//!
//! Only ASCII letters and digits count; `é` is neither upper nor lower here.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

/// Symbols accepted by the special-character check. Whitespace is excluded.
pub(crate) const SPECIAL_CHARS: &str = "@#$%&!^*()_+-=[]{};':\"\\|,.<>/?";

fn require(
    password: &SecretString,
    criterion: Criterion,
    pred: impl Fn(char) -> bool,
) -> SectionResult {
    if password.expose_secret().chars().any(pred) {
        None
    } else {
        Some(criterion)
    }
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Uppercase, |c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Lowercase, |c| c.is_ascii_lowercase())
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Digit, |c| c.is_ascii_digit())
}

/// Checks for at least one character from `SPECIAL_CHARS`.
pub fn special_section(password: &SecretString) -> SectionResult {
    require(password, Criterion::Special, |c| SPECIAL_CHARS.contains(c))
}
