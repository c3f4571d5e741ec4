use thiserror::Error;

/// Error for SenderName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SenderNameError {
    #[error("sender name must not be empty")]
    Empty,
}

/// Error type for mail delivery.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    #[error("failed to build email: {0}")]
    BuildFailed(String),

    #[error("failed to send email: {0}")]
    SendFailed(String),
}

/// Top-level error for contact form operations.
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("invalid sender name: {0}")]
    InvalidSenderName(#[from] SenderNameError),

    #[error(transparent)]
    Mail(#[from] MailerError),
}
