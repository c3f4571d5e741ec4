use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::Slug;
use crate::domain::category::ports::CategoryRepository;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CategoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId(row.id),
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO categories (name, slug, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new_category.name.as_str())
        .bind(new_category.slug.as_str())
        .bind(new_category.created_at)
        .bind(new_category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("categories_slug_key")
                {
                    return CategoryError::SlugAlreadyExists(new_category.slug.to_string());
                }
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(Category {
            id: CategoryId(id),
            name: new_category.name,
            slug: new_category.slug,
            created_at: new_category.created_at,
            updated_at: new_category.updated_at,
        })
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Category::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
