//! Auth service errors.

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by the auth service.
///
/// Invalid credentials are not an error: `login` returns `Ok(None)` so the
/// caller renders one generic message without learning which field was wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The session record could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The session record could not be serialized.
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
