use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid email address: {0}")]
    InvalidFormat(String),
}

/// Top-level error for user-related operations.
///
/// Lookup-miss (`NotFoundByUsername`) and password mismatch
/// (`InvalidCredentials`) stay distinct kinds here; the login boundary maps
/// both to the same status so callers cannot probe which usernames exist.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("user not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("database error: {0}")]
    DatabaseError(String),
}
