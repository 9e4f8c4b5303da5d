//! Password evaluation sections
//!
//! Each section checks one criterion of password strength.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use crate::types::Criterion;

/// Result type for section evaluation functions.
/// - `Some(criterion)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Criterion>;
