use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;

/// Domain service implementation for category operations.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let now = Utc::now();
        self.repository
            .create(NewCategory {
                name: command.name,
                slug: command.slug,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::category::models::CategoryId;
    use crate::domain::category::models::CategoryName;
    use crate::domain::category::models::Slug;

    mock! {
        pub TestCategoryRepository {}

        #[async_trait]
        impl CategoryRepository for TestCategoryRepository {
            async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryError>;
            async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;
            async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, CategoryError>;
            async fn find_all(&self) -> Result<Vec<Category>, CategoryError>;
        }
    }

    fn sample_category(id: i64, name: &str, slug: &str) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId(id),
            name: CategoryName::new(name.to_string()).unwrap(),
            slug: Slug::new(slug.to_string()).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_category_persists_with_server_timestamps() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_create()
            .withf(|new_category| {
                new_category.name.as_str() == "Rust" && new_category.slug.as_str() == "rust"
            })
            .times(1)
            .returning(|new_category| {
                Ok(Category {
                    id: CategoryId(1),
                    name: new_category.name,
                    slug: new_category.slug,
                    created_at: new_category.created_at,
                    updated_at: new_category.updated_at,
                })
            });

        let service = CategoryService::new(Arc::new(repository));

        let command = CreateCategoryCommand::new(
            CategoryName::new("Rust".to_string()).unwrap(),
            Slug::new("rust".to_string()).unwrap(),
        );
        let category = service
            .create_category(command)
            .await
            .expect("creation should succeed");

        assert_eq!(category.id, CategoryId(1));
    }

    #[tokio::test]
    async fn create_category_surfaces_duplicate_slug() {
        let mut repository = MockTestCategoryRepository::new();

        repository.expect_create().times(1).returning(|new_category| {
            Err(CategoryError::SlugAlreadyExists(
                new_category.slug.to_string(),
            ))
        });

        let service = CategoryService::new(Arc::new(repository));

        let command = CreateCategoryCommand::new(
            CategoryName::new("Rust".to_string()).unwrap(),
            Slug::new("rust".to_string()).unwrap(),
        );
        let result = service.create_category(command).await;

        assert!(matches!(result, Err(CategoryError::SlugAlreadyExists(_))));
    }

    #[tokio::test]
    async fn list_categories_returns_all() {
        let mut repository = MockTestCategoryRepository::new();

        repository.expect_find_all().times(1).returning(|| {
            Ok(vec![
                sample_category(1, "Rust", "rust"),
                sample_category(2, "Go", "go"),
            ])
        });

        let service = CategoryService::new(Arc::new(repository));

        let categories = service.list_categories().await.expect("listing");
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].slug.as_str(), "rust");
    }
}
