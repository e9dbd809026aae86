//! Error taxonomy for switch lookups and writes.

use thiserror::Error;

/// Boxed backend failure, so any storage implementation can report I/O errors.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures surfaced by the key codec, the threshold store, and the gate.
///
/// A missing record is never an error: it collapses into a `false` decision.
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid amount {amount:?}: expected a non-negative decimal integer")]
    InvalidAmount { amount: String },

    #[error("Storage backend unavailable: {0}")]
    BackendUnavailable(#[source] BackendError),

    #[error("Corrupt switch record {key:?}: {reason}")]
    CorruptRecord { key: String, reason: String },
}

impl SwitchError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        SwitchError::InvalidKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn backend(err: impl Into<BackendError>) -> Self {
        SwitchError::BackendUnavailable(err.into())
    }
}

pub type Result<T> = std::result::Result<T, SwitchError>;
