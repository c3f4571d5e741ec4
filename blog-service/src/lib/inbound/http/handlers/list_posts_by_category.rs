use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::category::models::Slug;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

/// Published posts of one category, newest first. An unknown category slug
/// answers 404.
pub async fn list_posts_by_category(
    State(state): State<AppState>,
    Path(cat_slug): Path<String>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    let slug = Slug::new(cat_slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .post_service
        .list_posts_by_category(&slug, true)
        .await
        .map_err(ApiError::from)
        .map(|posts| {
            let post_data: Vec<PostData> = posts.iter().map(|p| p.into()).collect();
            ApiSuccess::new(StatusCode::OK, post_data)
        })
}
