use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    email_templates::{EmailContent, welcome_email},
};

/// Outbound mail transport.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, to: &str, content: &EmailContent) -> AppResult<()>;
}

#[derive(Clone)]
pub struct MailRelayUseCases {
    relay: Arc<dyn MailRelay>,
}

impl MailRelayUseCases {
    pub fn new(relay: Arc<dyn MailRelay>) -> Self {
        Self { relay }
    }

    /// Send the fixed welcome email once. No retry.
    #[instrument(skip(self))]
    pub async fn send_welcome(&self, to: &str) -> AppResult<()> {
        let to = to.trim();
        if to.is_empty() {
            return Err(AppError::InvalidInput("Email is required".into()));
        }

        self.relay.send(to, &welcome_email()).await.inspect_err(|err| {
            tracing::error!(error = ?err, "Email error");
        })
    }
}
