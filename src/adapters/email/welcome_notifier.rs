use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::WelcomeNotifier,
};

/// Calls the mail-relay endpoint over HTTP.
#[derive(Clone)]
pub struct HttpWelcomeNotifier {
    client: Client,
    endpoint: Url,
}

impl HttpWelcomeNotifier {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[derive(Serialize)]
struct RelayReq<'a> {
    email: &'a str,
}

#[async_trait]
impl WelcomeNotifier for HttpWelcomeNotifier {
    async fn notify(&self, email: &str) -> AppResult<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&RelayReq { email })
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Mail(format!("relay returned {status}: {body}")));
        }
        Ok(())
    }
}
