use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::contact::errors::SenderNameError;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::models::SenderName;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn send_contact_message(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Result<ApiSuccess<ContactResponseData>, ApiError> {
    state
        .contact_service
        .send_message(body.try_into_message()?)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                ContactResponseData {
                    message: "message sent successfully".to_string(),
                },
            )
        })
}

/// HTTP request body for the contact form (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    name: String,
    email: String,
    content: String,
}

#[derive(Debug, Clone, Error)]
enum ParseContactRequestError {
    #[error("invalid sender name: {0}")]
    Name(#[from] SenderNameError),

    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("message content must not be empty")]
    EmptyContent,
}

impl ContactRequest {
    fn try_into_message(self) -> Result<ContactMessage, ParseContactRequestError> {
        let name = SenderName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        if self.content.trim().is_empty() {
            return Err(ParseContactRequestError::EmptyContent);
        }
        Ok(ContactMessage::new(name, email, self.content))
    }
}

impl From<ParseContactRequestError> for ApiError {
    fn from(err: ParseContactRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponseData {
    pub message: String,
}
