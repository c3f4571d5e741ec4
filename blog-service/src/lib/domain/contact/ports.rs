use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::errors::MailerError;
use crate::domain::contact::models::ContactMessage;

/// Port for contact form domain service operations.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// Compose the submission into an email and forward it to the
    /// configured admin address.
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactError>;
}

/// Outbound port for email delivery.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send a plain text email.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError>;
}
