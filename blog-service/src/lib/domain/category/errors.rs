use thiserror::Error;

/// Error for CategoryName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryNameError {
    #[error("category name must not be empty")]
    Empty,
}

/// Error for Slug validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,
}

/// Top-level error for category operations.
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("invalid category name: {0}")]
    InvalidName(#[from] CategoryNameError),

    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("category not found: {0}")]
    NotFound(String),

    #[error("category slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("database error: {0}")]
    DatabaseError(String),
}
