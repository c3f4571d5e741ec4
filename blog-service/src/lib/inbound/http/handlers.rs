use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::contact::errors::ContactError;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod create_category;
pub mod create_post;
pub mod get_post;
pub mod list_categories;
pub mod list_posts;
pub mod list_posts_by_category;
pub mod login;
pub mod register;
pub mod send_contact_message;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Boundary error, the only place domain error kinds become status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(message) => {
                tracing::error!(error = %message, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred".to_string(),
                )
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidEmail(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Hashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(_) | PostError::CategoryNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            PostError::SlugAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            PostError::InvalidTitle(_) | PostError::InvalidSlug(_) => {
                ApiError::BadRequest(err.to_string())
            }
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CategoryError::SlugAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CategoryError::InvalidName(_) | CategoryError::InvalidSlug(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CategoryError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::InvalidSenderName(_) => ApiError::BadRequest(err.to_string()),
            ContactError::Mail(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public part of a user. Deliberately has no password hash field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryData {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.as_i64(),
            name: category.name.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostData {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub photo: Option<String>,
    pub is_published: bool,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.as_i64(),
            title: post.title.as_str().to_string(),
            slug: post.slug.as_str().to_string(),
            content: post.content.clone(),
            photo: post.photo.clone(),
            is_published: post.published,
            category_id: post.category_id.as_i64(),
            category: post.category.as_ref().map(CategoryData::from),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
