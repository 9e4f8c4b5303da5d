//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

pub(crate) const MIN_LENGTH: usize = 8;

/// Checks if the password has at least `MIN_LENGTH` characters.
///
/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (an emoji, say) counts as two.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().encode_utf16().count() < MIN_LENGTH {
        return Some(Criterion::Length);
    }
    None
}
