//! Strength session - evaluates each password change and keeps the digest
//! of the latest strong input.
//!
//! Digests resolve on spawned tasks and report back over a channel tagged
//! with the generation that requested them. Only a resolution whose
//! generation matches the current one is applied, so the most recently
//! started request wins regardless of completion order.

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;

use crate::digest::{digest_password, DigestError};
use crate::evaluator::evaluate_password_strength;
use crate::types::StrengthClassification;

const DIGEST_CHANNEL_CAPACITY: usize = 16;

pub const SUBMIT_LABEL: &str = "Secure Login";
pub const SUBMIT_LABEL_TOO_WEAK: &str = "Password Too Weak";

/// A resolved digest request.
#[derive(Debug)]
pub(crate) struct DigestUpdate {
    pub(crate) generation: u64,
    pub(crate) result: Result<String, DigestError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The digest belongs to the current input and is now displayed.
    Applied,
    /// The input changed since the request; the result was discarded.
    Stale,
}

/// Owns the current classification and digest for one password field.
#[derive(Debug)]
pub struct StrengthSession {
    classification: StrengthClassification,
    digest: Option<String>,
    generation: u64,
    pending: usize,
    tx: mpsc::Sender<DigestUpdate>,
    rx: mpsc::Receiver<DigestUpdate>,
}

impl StrengthSession {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(DIGEST_CHANNEL_CAPACITY);
        Self {
            classification: StrengthClassification::default(),
            digest: None,
            generation: 0,
            pending: 0,
            tx,
            rx,
        }
    }

    /// Re-evaluates after the password changed.
    ///
    /// Any displayed digest is cleared. If the new password is strong,
    /// exactly one digest request is spawned for it.
    ///
    /// # Panics
    ///
    /// Spawning requires a Tokio runtime; calling this with a strong
    /// password outside one panics.
    pub fn on_password_change(&mut self, password: &SecretString) -> &StrengthClassification {
        self.generation += 1;
        self.digest = None;
        self.classification = evaluate_password_strength(password);

        if self.classification.is_strong() {
            self.spawn_digest(password);
        }

        &self.classification
    }

    /// Resets to the empty password.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.digest = None;
        self.classification = StrengthClassification::default();
    }

    fn spawn_digest(&mut self, password: &SecretString) {
        let generation = self.generation;
        let tx = self.tx.clone();
        let owned = SecretString::new(password.expose_secret().into());
        self.pending += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(generation, "digest requested");

        tokio::spawn(async move {
            let result = digest_password(&owned).await;
            if let Err(_e) = tx.send(DigestUpdate { generation, result }).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send digest result: {}", _e);
            }
        });
    }

    /// Applies a resolved request if it belongs to the current input.
    ///
    /// A worker error is returned only for the current request; stale
    /// errors are dropped with the rest of the stale result.
    pub(crate) fn apply(&mut self, update: DigestUpdate) -> Result<Resolution, DigestError> {
        // Only strong inputs spawn requests, and every change or clear bumps
        // the generation, so a match means the current input is strong.
        if update.generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                generation = update.generation,
                current = self.generation,
                "stale digest discarded"
            );
            return Ok(Resolution::Stale);
        }

        match update.result {
            Ok(digest) => {
                self.digest = Some(digest);
                Ok(Resolution::Applied)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Digest failed for current password: {}", e);
                Err(e)
            }
        }
    }

    /// Waits for the next in-flight request and applies it.
    ///
    /// Returns `None` when no request is pending.
    pub async fn next_resolution(&mut self) -> Option<Result<Resolution, DigestError>> {
        if self.pending == 0 {
            return None;
        }
        // The session holds a sender, so the channel never closes here.
        let update = self.rx.recv().await?;
        self.pending -= 1;
        Some(self.apply(update))
    }

    /// Drains every pending request and returns the digest left on display.
    pub async fn settle(&mut self) -> Result<Option<&str>, DigestError> {
        while let Some(resolution) = self.next_resolution().await {
            resolution?;
        }
        Ok(self.digest())
    }

    pub fn classification(&self) -> &StrengthClassification {
        &self.classification
    }

    /// Digest of the current password, once it has resolved.
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn can_submit(&self) -> bool {
        self.classification.is_strong()
    }

    /// Label for the submit action. The action itself does nothing.
    pub fn submit_label(&self) -> &'static str {
        if self.can_submit() {
            SUBMIT_LABEL
        } else {
            SUBMIT_LABEL_TOO_WEAK
        }
    }
}

impl Default for StrengthSession {
    fn default() -> Self {
        Self::new()
    }
}
