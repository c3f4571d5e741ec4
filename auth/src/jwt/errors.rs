use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are split by cause so the request boundary can
/// report an expired token differently from a forged or garbled one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is expired")]
    TokenExpired,

    #[error("token is malformed: {0}")]
    Malformed(String),
}
