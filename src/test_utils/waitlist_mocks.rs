//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{WaitlistRepo, WelcomeNotifier},
};

/// Failure the in-memory repo should simulate on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFailure {
    Database,
    Network,
}

impl StorageFailure {
    fn to_error(self) -> AppError {
        match self {
            StorageFailure::Database => AppError::Database("simulated failure".into()),
            StorageFailure::Network => AppError::Network("connection refused".into()),
        }
    }
}

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo that enforces email uniqueness.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    failure: Option<StorageFailure>,
    insert_calls: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Every call fails with the given error.
    pub fn failing(failure: StorageFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Get all entries in insertion order (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &str, source: &str) -> AppResult<WaitlistEntry> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == email) {
            return Err(AppError::Duplicate);
        }

        // Keep created_at strictly increasing even within one clock tick
        let now = chrono::Utc::now();
        let created_at = match entries.iter().map(|e| e.created_at).max() {
            Some(last) if last >= now => last + chrono::Duration::microseconds(1),
            _ => now,
        };

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.to_string(),
            source: Some(source.to_string()),
            created_at,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }

        let mut entries = self.get_all();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

// ============================================================================
// RecordingWelcomeNotifier
// ============================================================================

/// Reports every notify attempt on a channel so tests can await the
/// detached welcome task.
pub struct RecordingWelcomeNotifier {
    attempts: mpsc::UnboundedSender<String>,
    fail: bool,
}

impl RecordingWelcomeNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                attempts: tx,
                fail: false,
            },
            rx,
        )
    }

    /// Records the attempt, then fails like an unreachable relay.
    pub fn failing() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (mut notifier, rx) = Self::new();
        notifier.fail = true;
        (notifier, rx)
    }
}

#[async_trait]
impl WelcomeNotifier for RecordingWelcomeNotifier {
    async fn notify(&self, email: &str) -> AppResult<()> {
        // Receiver may already be gone
        let _ = self.attempts.send(email.to_string());
        if self.fail {
            return Err(AppError::Network("relay unreachable".into()));
        }
        Ok(())
    }
}
