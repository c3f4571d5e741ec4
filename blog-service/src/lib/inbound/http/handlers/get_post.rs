use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::category::models::Slug;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_slug): Path<String>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let slug = Slug::new(post_slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .post_service
        .get_post_by_slug(&slug)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
