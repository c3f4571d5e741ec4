use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

/// Public listing: published posts only, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    state
        .post_service
        .list_posts(true)
        .await
        .map_err(ApiError::from)
        .map(|posts| {
            let post_data: Vec<PostData> = posts.iter().map(|p| p.into()).collect();
            ApiSuccess::new(StatusCode::OK, post_data)
        })
}
