use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{Instrument, instrument};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        submission_status::{SubmissionEvent, SubmissionStatus},
        waitlist_entry::{LANDING_PAGE_SOURCE, WaitlistEntry},
    },
    validators::{is_valid_email, normalize_email},
};

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const DUPLICATE_MESSAGE: &str = "This email is already on our waitlist!";
pub const SUBMIT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to connect. Please try again later.";
pub const SUCCESS_MESSAGE: &str = "You're on the list.";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert a new row. A uniqueness violation on `email` must surface as
    /// `AppError::Duplicate`.
    async fn insert(&self, email: &str, source: &str) -> AppResult<WaitlistEntry>;
    /// Every row, newest first.
    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>>;
}

/// Asks the relay endpoint to send the welcome email.
#[async_trait]
pub trait WelcomeNotifier: Send + Sync {
    async fn notify(&self, email: &str) -> AppResult<()>;
}

/// Why a submission ended in `SubmissionStatus::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFailure {
    Input,
    Storage,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub status: SubmissionStatus,
    pub failure: Option<SubmissionFailure>,
    pub message: &'static str,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    notifier: Arc<dyn WelcomeNotifier>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, notifier: Arc<dyn WelcomeNotifier>) -> Self {
        Self { repo, notifier }
    }

    /// Validate, store, and kick off the welcome email.
    ///
    /// Every failure is folded into the returned outcome. The welcome email
    /// runs detached and cannot change it.
    #[instrument(skip_all)]
    pub async fn submit(&self, raw_email: &str) -> SubmissionOutcome {
        let status = SubmissionStatus::Idle;
        let email = raw_email.trim();

        if email.is_empty() {
            return reject(status, EMPTY_EMAIL_MESSAGE);
        }
        if !is_valid_email(email) {
            return reject(status, INVALID_EMAIL_MESSAGE);
        }

        let email = normalize_email(email);
        let status = advance(status, SubmissionEvent::Submit);

        match self.repo.insert(&email, LANDING_PAGE_SOURCE).await {
            Ok(entry) => {
                tracing::info!(entry_id = %entry.id, "Waitlist signup stored");
                self.dispatch_welcome(entry.email);
                SubmissionOutcome {
                    status: advance(status, SubmissionEvent::Inserted),
                    failure: None,
                    message: SUCCESS_MESSAGE,
                }
            }
            Err(AppError::Duplicate) => {
                tracing::info!("Signup skipped, email already on the waitlist");
                SubmissionOutcome {
                    status: advance(status, SubmissionEvent::DuplicateDetected),
                    failure: None,
                    message: DUPLICATE_MESSAGE,
                }
            }
            Err(AppError::Network(err)) => {
                tracing::error!(error = %err, "Waitlist storage unreachable");
                SubmissionOutcome {
                    status: advance(status, SubmissionEvent::Failed),
                    failure: Some(SubmissionFailure::Network),
                    message: NETWORK_ERROR_MESSAGE,
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "Waitlist insert failed");
                SubmissionOutcome {
                    status: advance(status, SubmissionEvent::Failed),
                    failure: Some(SubmissionFailure::Storage),
                    message: SUBMIT_ERROR_MESSAGE,
                }
            }
        }
    }

    /// Fire-and-forget welcome email. The handle is returned for tests only;
    /// `submit` drops it.
    fn dispatch_welcome(&self, email: String) -> JoinHandle<()> {
        let notifier = self.notifier.clone();
        tokio::spawn(
            async move {
                match notifier.notify(&email).await {
                    Ok(()) => tracing::info!("Welcome email requested"),
                    Err(err) => tracing::error!(error = ?err, "Failed to send welcome email"),
                }
            }
            .instrument(tracing::info_span!("welcome_email")),
        )
    }
}

fn reject(status: SubmissionStatus, message: &'static str) -> SubmissionOutcome {
    SubmissionOutcome {
        status: advance(status, SubmissionEvent::Rejected),
        failure: Some(SubmissionFailure::Input),
        message,
    }
}

fn advance(status: SubmissionStatus, event: SubmissionEvent) -> SubmissionStatus {
    status.apply(event).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Unexpected submission transition");
        SubmissionStatus::Error
    })
}
