//! Digest pipeline - SHA-256 of a password as lowercase hex.

use sha2::{Digest, Sha256};

#[cfg(feature = "async")]
use secrecy::{ExposeSecret, SecretString};
#[cfg(feature = "async")]
use thiserror::Error;

/// Computes the SHA-256 digest of `bytes`.
///
/// # Returns
///
/// A 64-character lowercase hexadecimal string, zero-padded per byte.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(feature = "async")]
#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Digest worker did not complete: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Hashes the UTF-8 bytes of `password` off the calling task.
///
/// The hashing itself cannot fail; an error only means the blocking worker
/// was lost (runtime shutdown or a panic).
#[cfg(feature = "async")]
pub async fn digest_password(password: &SecretString) -> Result<String, DigestError> {
    let owned = SecretString::new(password.expose_secret().into());
    let encoded =
        tokio::task::spawn_blocking(move || sha256_hex(owned.expose_secret().as_bytes())).await?;
    Ok(encoded)
}
