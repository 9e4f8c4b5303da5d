//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionResult,
};
use crate::types::StrengthClassification;

/// Sections in criterion order. Feedback follows this order.
const SECTIONS: [(&str, fn(&SecretString) -> SectionResult); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Evaluates password strength and returns its classification.
///
/// Total and deterministic: every input, including the empty string,
/// yields a classification. The empty password short-circuits before any
/// section runs.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthClassification` with label, color, score and feedback.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthClassification {
    if password.expose_secret().is_empty() {
        return StrengthClassification::empty();
    }

    let mut failing = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        if let Some(criterion) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section failed: {}", _section_name);
            failing.push(criterion);
        }
    }

    let classification = StrengthClassification::from_failing(failing);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        label = %classification.label(),
        failing = classification.failing_criteria().len(),
        "password evaluated"
    );

    classification
}
