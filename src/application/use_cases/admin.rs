use std::sync::Arc;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use time::Duration;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::jwt::{self, ADMIN_SUBJECT},
    csv_export::{CsvExport, build_export},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

/// Shared-PIN gate over the waitlist table.
#[derive(Clone)]
pub struct AdminUseCases {
    repo: Arc<dyn WaitlistRepo>,
    pin: SecretString,
    jwt_secret: SecretString,
    session_ttl: Duration,
}

impl AdminUseCases {
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        pin: SecretString,
        jwt_secret: SecretString,
        session_ttl: Duration,
    ) -> Self {
        Self {
            repo,
            pin,
            jwt_secret,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Check the PIN and issue a session token.
    #[instrument(skip_all)]
    pub fn login(&self, pin: &str) -> AppResult<String> {
        if !pin_matches(pin, self.pin.expose_secret()) {
            tracing::warn!("Admin login rejected");
            return Err(AppError::InvalidCredentials);
        }
        jwt::issue(ADMIN_SUBJECT, &self.jwt_secret, self.session_ttl)
    }

    pub fn authorize(&self, token: &str) -> AppResult<()> {
        let claims = jwt::verify(token, &self.jwt_secret)?;
        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::InvalidCredentials);
        }
        Ok(())
    }

    pub async fn list_entries(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn export_csv(&self, now: DateTime<Utc>) -> AppResult<CsvExport> {
        let entries = self.repo.list_all().await?;
        tracing::info!(rows = entries.len(), "Exporting waitlist");
        Ok(build_export(&entries, now))
    }
}

/// Compares digests so the time taken does not depend on where the inputs differ.
fn pin_matches(candidate: &str, expected: &str) -> bool {
    let a = Sha256::digest(candidate.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
