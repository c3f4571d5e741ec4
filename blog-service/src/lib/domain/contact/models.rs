use std::fmt;

use crate::domain::contact::errors::SenderNameError;
use crate::domain::user::models::EmailAddress;

/// Contact form submission. Transient: composed into an email and forwarded,
/// never persisted.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: SenderName,
    pub email: EmailAddress,
    pub content: String,
}

impl ContactMessage {
    pub fn new(name: SenderName, email: EmailAddress, content: String) -> Self {
        Self {
            name,
            email,
            content,
        }
    }
}

/// Sender name value type; must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderName(String);

impl SenderName {
    pub fn new(name: String) -> Result<Self, SenderNameError> {
        if name.trim().is_empty() {
            Err(SenderNameError::Empty)
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
