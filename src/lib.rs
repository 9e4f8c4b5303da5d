//! Password strength meter library
//!
//! This library classifies a password against five fixed criteria
//! (length, uppercase, lowercase, digit, special character) and, once the
//! password is strong, produces its SHA-256 digest.
//!
//! # Features
//!
//! - `async` (default): Enables the async digest pipeline and `StrengthSession`
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_meter::{evaluate_password_strength, sha256_hex, StrengthLabel};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.label(), StrengthLabel::Strong);
//! if evaluation.is_strong() {
//!     let digest = sha256_hex(password.expose_secret().as_bytes());
//!     assert_eq!(digest.len(), 64);
//! }
//! ```

// Internal modules
mod digest;
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "async")]
mod session;

// Public API
pub use digest::sha256_hex;
pub use evaluator::evaluate_password_strength;
pub use types::{
    Criterion, StrengthClassification, StrengthColor, StrengthLabel, StrengthScore,
    SECURE_FEEDBACK,
};

#[cfg(feature = "async")]
pub use digest::{digest_password, DigestError};

#[cfg(feature = "async")]
pub use session::{Resolution, StrengthSession, SUBMIT_LABEL, SUBMIT_LABEL_TOO_WEAK};
