use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::Slug;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a new category.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - Slug is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn create_category(&self, command: CreateCategoryCommand)
        -> Result<Category, CategoryError>;

    /// Retrieve all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;
}

/// Persistence port for categories. Slug uniqueness is enforced by the
/// storage layer.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category and return it with its storage-assigned id.
    async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryError>;

    /// Retrieve a category by identifier, `None` if absent.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve a category by slug, `None` if absent.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, CategoryError>;

    /// Retrieve all categories.
    async fn find_all(&self) -> Result<Vec<Category>, CategoryError>;
}
