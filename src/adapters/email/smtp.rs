use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_error::{AppError, AppResult},
    email_templates::EmailContent,
    use_cases::mail_relay::MailRelay,
};

/// Authenticated SMTP relay over implicit TLS.
pub struct SmtpMailRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailRelay {
    pub fn new(host: &str, user: String, pass: &SecretString, from: &str) -> AppResult<Self> {
        let from = from
            .parse::<Mailbox>()
            .map_err(|e| AppError::InvalidInput(format!("invalid sender address: {e}")))?;
        let credentials = Credentials::new(user, pass.expose_secret().to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| AppError::Mail(e.to_string()))?
            .credentials(credentials)
            .build();

        Ok(Self { transport, from })
    }
}

fn build_message(from: &Mailbox, to: &str, content: &EmailContent) -> AppResult<Message> {
    let to = to
        .parse::<Mailbox>()
        .map_err(|e| AppError::Mail(format!("invalid recipient address: {e}")))?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(content.subject)
        .multipart(MultiPart::alternative_plain_html(
            content.text.to_string(),
            content.html.to_string(),
        ))
        .map_err(|e| AppError::Mail(e.to_string()))
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send(&self, to: &str, content: &EmailContent) -> AppResult<()> {
        let message = build_message(&self.from, to, content)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::Mail(e.to_string()))?;
        Ok(())
    }
}
