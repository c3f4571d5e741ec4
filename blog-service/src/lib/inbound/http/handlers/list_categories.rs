use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CategoryData;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CategoryData>>, ApiError> {
    state
        .category_service
        .list_categories()
        .await
        .map_err(ApiError::from)
        .map(|categories| {
            let category_data: Vec<CategoryData> =
                categories.iter().map(|c| c.into()).collect();
            ApiSuccess::new(StatusCode::OK, category_data)
        })
}
