use thiserror::Error;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::errors::SlugError;

/// Error for PostTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("post title must not be empty")]
    Empty,
}

/// Top-level error for blog post operations.
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("invalid title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("post not found: {0}")]
    NotFound(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("post slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("database error: {0}")]
    DatabaseError(String),
}

impl From<CategoryError> for PostError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(slug) => PostError::CategoryNotFound(slug),
            CategoryError::InvalidSlug(e) => PostError::InvalidSlug(e),
            CategoryError::DatabaseError(msg) => PostError::DatabaseError(msg),
            other => PostError::DatabaseError(other.to_string()),
        }
    }
}
