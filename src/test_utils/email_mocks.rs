//! In-memory mail relay for testing.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    email_templates::EmailContent,
    use_cases::mail_relay::MailRelay,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub content: EmailContent,
}

/// Records sent messages, or fails every send with a fixed relay message.
#[derive(Default)]
pub struct RecordingMailRelay {
    sent: Mutex<Vec<SentEmail>>,
    failure: Option<String>,
}

impl RecordingMailRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(details: &str) -> Self {
        Self {
            failure: Some(details.to_string()),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailRelay for RecordingMailRelay {
    async fn send(&self, to: &str, content: &EmailContent) -> AppResult<()> {
        if let Some(details) = &self.failure {
            return Err(AppError::Mail(details.clone()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            content: *content,
        });
        Ok(())
    }
}
