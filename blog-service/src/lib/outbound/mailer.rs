use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;

use crate::config::SmtpConfig;
use crate::domain::contact::errors::MailerError;
use crate::domain::contact::ports::Mailer;

/// SMTP implementation of the mailer port.
///
/// Plaintext transport on the configured host/port (a local relay such as
/// Mailhog by default); authenticates only when a username is configured.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Self {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Self {
            transport: builder.build(),
            from: config.from.clone(),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self
                .from
                .parse()
                .map_err(|e: lettre::address::AddressError| {
                    MailerError::BuildFailed(e.to_string())
                })?)
            .to(to
                .parse()
                .map_err(|e: lettre::address::AddressError| {
                    MailerError::BuildFailed(e.to_string())
                })?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailerError::BuildFailed(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
