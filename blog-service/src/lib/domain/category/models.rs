use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::errors::CategoryNameError;
use crate::domain::category::errors::SlugError;

/// Blog post category.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category identifier, assigned by storage on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category name value type; must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(name: String) -> Result<Self, CategoryNameError> {
        if name.trim().is_empty() {
            Err(CategoryNameError::Empty)
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// URL slug value type, shared by categories and posts; must be non-empty.
/// Uniqueness is a storage constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(slug: String) -> Result<Self, SlugError> {
        if slug.trim().is_empty() {
            Err(SlugError::Empty)
        } else {
            Ok(Self(slug))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a category with validated fields.
#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: CategoryName,
    pub slug: Slug,
}

impl CreateCategoryCommand {
    pub fn new(name: CategoryName, slug: Slug) -> Self {
        Self { name, slug }
    }
}

/// Category data ready for persistence; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rejects_empty() {
        assert_eq!(Slug::new(String::new()), Err(SlugError::Empty));
        assert!(Slug::new("rust-basics".to_string()).is_ok());
    }

    #[test]
    fn category_name_rejects_empty() {
        assert_eq!(
            CategoryName::new("  ".to_string()),
            Err(CategoryNameError::Empty)
        );
        assert!(CategoryName::new("Rust".to_string()).is_ok());
    }
}
