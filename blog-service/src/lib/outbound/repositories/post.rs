use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::Slug;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Post row joined with its category, the storage-side equivalent of the
/// eager-loaded `Post::category`.
#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    photo: Option<String>,
    published: bool,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: String,
    category_slug: String,
    category_created_at: DateTime<Utc>,
    category_updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = PostError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let category = Category {
            id: CategoryId(row.category_id),
            name: CategoryName::new(row.category_name)
                .map_err(|e| PostError::DatabaseError(e.to_string()))?,
            slug: Slug::new(row.category_slug)?,
            created_at: row.category_created_at,
            updated_at: row.category_updated_at,
        };

        Ok(Post {
            id: PostId(row.id),
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: row.content,
            photo: row.photo,
            published: row.published,
            category_id: CategoryId(row.category_id),
            category: Some(category),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const POST_SELECT: &str = r#"
    SELECT p.id, p.title, p.slug, p.content, p.photo, p.published, p.category_id,
           p.created_at, p.updated_at,
           c.name AS category_name, c.slug AS category_slug,
           c.created_at AS category_created_at, c.updated_at AS category_updated_at
    FROM posts p
    JOIN categories c ON c.id = p.category_id
"#;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, PostError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, slug, content, photo, published, category_id,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(new_post.title.as_str())
        .bind(new_post.slug.as_str())
        .bind(&new_post.content)
        .bind(new_post.photo.as_deref())
        .bind(new_post.published)
        .bind(new_post.category_id.as_i64())
        .bind(new_post.created_at)
        .bind(new_post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("posts_slug_key") {
                    return PostError::SlugAlreadyExists(new_post.slug.to_string());
                }
            }
            PostError::DatabaseError(e.to_string())
        })?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(Post {
            id: PostId(id),
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
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Post>, PostError> {
        let query = format!("{} WHERE p.slug = $1", POST_SELECT);

        let row = sqlx::query_as::<_, PostRow>(&query)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.map(Post::try_from).transpose()
    }

    async fn find_all(&self, published_only: bool) -> Result<Vec<Post>, PostError> {
        let query = format!(
            "{} WHERE (NOT $1 OR p.published) ORDER BY p.created_at DESC",
            POST_SELECT
        );

        let rows = sqlx::query_as::<_, PostRow>(&query)
            .bind(published_only)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
        published_only: bool,
    ) -> Result<Vec<Post>, PostError> {
        let query = format!(
            "{} WHERE p.category_id = $1 AND (NOT $2 OR p.published) ORDER BY p.created_at DESC",
            POST_SELECT
        );

        let rows = sqlx::query_as::<_, PostRow>(&query)
            .bind(category_id.as_i64())
            .bind(published_only)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
