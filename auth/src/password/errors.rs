use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// The hashing operation itself failed. Never caused by the password
    /// content, only by an internal failure of the hasher.
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is structurally invalid. A well-formed hash that
    /// simply does not match yields `Ok(false)` from verify, not this error.
    #[error("password verification failed: {0}")]
    VerificationFailed(String),
}
