use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::Slug;
use crate::domain::post::errors::PostTitleError;

/// Blog post aggregate.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: String,
    pub photo: Option<String>,
    pub published: bool,
    pub category_id: CategoryId,
    /// Category eager-loaded by read queries; `None` straight after create.
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post identifier, assigned by storage on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title value type; must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        if title.trim().is_empty() {
            Err(PostTitleError::Empty)
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a blog post with validated fields.
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: String,
    pub photo: Option<String>,
    pub published: bool,
    pub category_id: CategoryId,
}

/// Post data ready for persistence; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub content: String,
    pub photo: Option<String>,
    pub published: bool,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_title_rejects_empty() {
        assert_eq!(PostTitle::new(String::new()), Err(PostTitleError::Empty));
        assert!(PostTitle::new("Hello, world".to_string()).is_ok());
    }
}
