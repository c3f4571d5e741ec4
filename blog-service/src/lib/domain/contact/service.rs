use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::contact::ports::Mailer;

/// Domain service implementation for contact form operations.
pub struct ContactService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    admin_email: String,
}

impl<M> ContactService<M>
where
    M: Mailer,
{
    pub fn new(mailer: Arc<M>, admin_email: String) -> Self {
        Self {
            mailer,
            admin_email,
        }
    }
}

#[async_trait]
impl<M> ContactServicePort for ContactService<M>
where
    M: Mailer,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactError> {
        let subject = format!("Contact form message from {}", message.name);
        let body = format!("From: {}\n\n{}", message.email.as_str(), message.content);

        self.mailer
            .send(&self.admin_email, &subject, &body)
            .await?;

        Ok(())
    }
}
