use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Login endpoint.
///
/// An unknown username and a wrong password both answer 401 with the same
/// message, so the response never reveals whether the username exists.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("invalid credentials".to_string()))?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::Unauthorized("invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let claims = auth::Claims::for_user(
        user.id.as_i64(),
        user.username.as_str().to_string(),
        state.jwt_expiration_hours,
    );

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("invalid credentials".to_string())
            }
            auth::AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("password verification failed: {}", err))
            }
            auth::AuthenticationError::Jwt(err) => {
                ApiError::InternalServerError(format!("token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            user: (&user).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: UserData,
}
