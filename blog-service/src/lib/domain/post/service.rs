use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::models::Slug;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;

/// Domain service implementation for blog post operations.
pub struct PostService<PR, CR>
where
    PR: PostRepository,
    CR: CategoryRepository,
{
    post_repository: Arc<PR>,
    category_repository: Arc<CR>,
}

impl<PR, CR> PostService<PR, CR>
where
    PR: PostRepository,
    CR: CategoryRepository,
{
    pub fn new(post_repository: Arc<PR>, category_repository: Arc<CR>) -> Self {
        Self {
            post_repository,
            category_repository,
        }
    }
}

#[async_trait]
impl<PR, CR> PostServicePort for PostService<PR, CR>
where
    PR: PostRepository,
    CR: CategoryRepository,
{
    async fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, PostError> {
        self.post_repository.find_all(published_only).await
    }

    async fn get_post_by_slug(&self, slug: &Slug) -> Result<Post, PostError> {
        self.post_repository
            .find_by_slug(slug)
            .await?
            .ok_or(PostError::NotFound(slug.to_string()))
    }

    async fn list_posts_by_category(
        &self,
        category_slug: &Slug,
        published_only: bool,
    ) -> Result<Vec<Post>, PostError> {
        let category = self
            .category_repository
            .find_by_slug(category_slug)
            .await
            .map_err(PostError::from)?
            .ok_or(PostError::CategoryNotFound(category_slug.to_string()))?;

        self.post_repository
            .find_by_category_id(category.id, published_only)
            .await
    }

    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError> {
        self.category_repository
            .find_by_id(command.category_id)
            .await
            .map_err(PostError::from)?
            .ok_or(PostError::CategoryNotFound(command.category_id.to_string()))?;

        let now = Utc::now();
        self.post_repository
            .create(NewPost {
                title: command.title,
                slug: command.slug,
                content: command.content,
                photo: command.photo,
                published: command.published,
                category_id: command.category_id,
                created_at: now,
                updated_at: now,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::category::errors::CategoryError;
    use crate::domain::category::models::Category;
    use crate::domain::category::models::CategoryId;
    use crate::domain::category::models::CategoryName;
    use crate::domain::category::models::NewCategory;
    use crate::domain::post::models::PostId;
    use crate::domain::post::models::PostTitle;

    mock! {
        pub TestPostRepository {}

        #[async_trait]
        impl PostRepository for TestPostRepository {
            async fn create(&self, new_post: NewPost) -> Result<Post, PostError>;
            async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Post>, PostError>;
            async fn find_all(&self, published_only: bool) -> Result<Vec<Post>, PostError>;
            async fn find_by_category_id(
                &self,
                category_id: CategoryId,
                published_only: bool,
            ) -> Result<Vec<Post>, PostError>;
        }
    }

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

    fn sample_category(id: i64, slug: &str) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId(id),
            name: CategoryName::new("Rust".to_string()).unwrap(),
            slug: Slug::new(slug.to_string()).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_post(id: i64, slug: &str, published: bool) -> Post {
        let now = Utc::now();
        Post {
            id: PostId(id),
            title: PostTitle::new("Hello".to_string()).unwrap(),
            slug: Slug::new(slug.to_string()).unwrap(),
            content: "content".to_string(),
            photo: None,
            published,
            category_id: CategoryId(1),
            category: Some(sample_category(1, "rust")),
            created_at: now,
            updated_at: now,
        }
    }

    fn create_command(slug: &str, category_id: i64) -> CreatePostCommand {
        CreatePostCommand {
            title: PostTitle::new("Hello".to_string()).unwrap(),
            slug: Slug::new(slug.to_string()).unwrap(),
            content: "content".to_string(),
            photo: None,
            published: true,
            category_id: CategoryId(category_id),
        }
    }

    #[tokio::test]
    async fn list_posts_passes_published_filter_through() {
        let mut post_repository = MockTestPostRepository::new();
        let category_repository = MockTestCategoryRepository::new();

        post_repository
            .expect_find_all()
            .withf(|published_only| *published_only)
            .times(1)
            .returning(|_| Ok(vec![sample_post(1, "hello", true)]));

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let posts = service.list_posts(true).await.expect("listing");
        assert_eq!(posts.len(), 1);
        assert!(posts[0].published);
    }

    #[tokio::test]
    async fn get_post_by_slug_missing_is_not_found() {
        let mut post_repository = MockTestPostRepository::new();
        let category_repository = MockTestCategoryRepository::new();

        post_repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let slug = Slug::new("ghost".to_string()).unwrap();
        let result = service.get_post_by_slug(&slug).await;

        assert!(matches!(result, Err(PostError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_posts_by_category_resolves_slug_first() {
        let mut post_repository = MockTestPostRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();

        category_repository
            .expect_find_by_slug()
            .withf(|slug| slug.as_str() == "rust")
            .times(1)
            .returning(|_| Ok(Some(sample_category(1, "rust"))));
        post_repository
            .expect_find_by_category_id()
            .withf(|category_id, published_only| *category_id == CategoryId(1) && *published_only)
            .times(1)
            .returning(|_, _| Ok(vec![sample_post(1, "hello", true)]));

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let slug = Slug::new("rust".to_string()).unwrap();
        let posts = service
            .list_posts_by_category(&slug, true)
            .await
            .expect("listing");
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn list_posts_by_unknown_category_is_category_not_found() {
        let post_repository = MockTestPostRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();

        category_repository
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let slug = Slug::new("ghost".to_string()).unwrap();
        let result = service.list_posts_by_category(&slug, true).await;

        assert!(matches!(result, Err(PostError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn create_post_requires_existing_category() {
        let post_repository = MockTestPostRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();

        category_repository
            .expect_find_by_id()
            .withf(|id| *id == CategoryId(99))
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let result = service.create_post(create_command("hello", 99)).await;

        assert!(matches!(result, Err(PostError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn create_post_persists_with_server_timestamps() {
        let mut post_repository = MockTestPostRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();

        category_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_category(1, "rust"))));
        post_repository
            .expect_create()
            .withf(|new_post| {
                new_post.slug.as_str() == "hello"
                    && new_post.published
                    && new_post.category_id == CategoryId(1)
                    && new_post.created_at == new_post.updated_at
            })
            .times(1)
            .returning(|new_post| {
                Ok(Post {
                    id: PostId(5),
                    title: new_post.title,
                    slug: new_post.slug,
                    content: new_post.content,
                    photo: new_post.photo,
                    published: new_post.published,
                    category_id: new_post.category_id,
                    category: None,
                    created_at: new_post.created_at,
                    updated_at: new_post.updated_at,
                })
            });

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let post = service
            .create_post(create_command("hello", 1))
            .await
            .expect("creation should succeed");

        assert_eq!(post.id, PostId(5));
    }

    #[tokio::test]
    async fn create_post_surfaces_duplicate_slug() {
        let mut post_repository = MockTestPostRepository::new();
        let mut category_repository = MockTestCategoryRepository::new();

        category_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_category(1, "rust"))));
        post_repository.expect_create().times(1).returning(|new_post| {
            Err(PostError::SlugAlreadyExists(new_post.slug.to_string()))
        });

        let service = PostService::new(Arc::new(post_repository), Arc::new(category_repository));

        let result = service.create_post(create_command("hello", 1)).await;

        assert!(matches!(result, Err(PostError::SlugAlreadyExists(_))));
    }
}
