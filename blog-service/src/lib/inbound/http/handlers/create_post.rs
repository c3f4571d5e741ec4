use axum::extract::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::category::errors::SlugError;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::Slug;
use crate::domain::post::errors::PostTitleError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post = state
        .post_service
        .create_post(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(
        user_id = user.user_id.as_i64(),
        username = %user.username,
        post_id = post.id.as_i64(),
        slug = %post.slug,
        "post created"
    );

    Ok(ApiSuccess::new(StatusCode::CREATED, (&post).into()))
}

/// HTTP request body for creating a post (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: String,
    slug: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    is_published: bool,
    category_id: i64,
}

#[derive(Debug, Clone, Error)]
enum ParseCreatePostRequestError {
    #[error("invalid title: {0}")]
    Title(#[from] PostTitleError),

    #[error("invalid slug: {0}")]
    Slug(#[from] SlugError),
}

impl CreatePostRequest {
    fn try_into_command(self) -> Result<CreatePostCommand, ParseCreatePostRequestError> {
        let title = PostTitle::new(self.title)?;
        let slug = Slug::new(self.slug)?;
        Ok(CreatePostCommand {
            title,
            slug,
            content: self.content,
            photo: self.photo,
            published: self.is_published,
            category_id: CategoryId(self.category_id),
        })
    }
}

impl From<ParseCreatePostRequestError> for ApiError {
    fn from(err: ParseCreatePostRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
