use async_trait::async_trait;

use crate::domain::category::models::CategoryId;
use crate::domain::category::models::Slug;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;

/// Port for blog post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Retrieve posts, newest first. With `published_only` set, unpublished
    /// drafts are excluded.
    async fn list_posts(&self, published_only: bool) -> Result<Vec<Post>, PostError>;

    /// Retrieve a single post by its slug.
    ///
    /// # Errors
    /// * `NotFound` - No post with this slug
    /// * `DatabaseError` - Storage operation failed
    async fn get_post_by_slug(&self, slug: &Slug) -> Result<Post, PostError>;

    /// Retrieve the posts of the category with the given slug, newest first.
    ///
    /// # Errors
    /// * `CategoryNotFound` - No category with this slug
    /// * `DatabaseError` - Storage operation failed
    async fn list_posts_by_category(
        &self,
        category_slug: &Slug,
        published_only: bool,
    ) -> Result<Vec<Post>, PostError>;

    /// Create a new blog post. The referenced category must exist.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `SlugAlreadyExists` - Post slug is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError>;
}

/// Persistence port for blog posts. Slug uniqueness is enforced by the
/// storage layer.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post and return it with its storage-assigned id.
    async fn create(&self, new_post: NewPost) -> Result<Post, PostError>;

    /// Retrieve a post by slug with its category, `None` if absent.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Post>, PostError>;

    /// Retrieve posts with their categories, newest first.
    async fn find_all(&self, published_only: bool) -> Result<Vec<Post>, PostError>;

    /// Retrieve the posts of a category, newest first.
    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
        published_only: bool,
    ) -> Result<Vec<Post>, PostError>;
}
