//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::SecretString;
use time::Duration;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::{InMemoryWaitlistRepo, RecordingMailRelay, RecordingWelcomeNotifier, StorageFailure},
    use_cases::{admin::AdminUseCases, mail_relay::MailRelayUseCases, waitlist::WaitlistUseCases},
};

pub const TEST_ADMIN_PIN: &str = "4821";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        database_url: "postgres://localhost/waitlist_test".to_string(),
        run_migrations: false,
        email_user: "relay@example.com".to_string(),
        email_pass: secret("relay-password"),
        smtp_host: "smtp.example.com".to_string(),
        email_from: "\"The Bridge\" <relay@example.com>".to_string(),
        welcome_relay_url: "http://127.0.0.1:3001/api/email"
            .parse()
            .expect("static URL is valid"),
        admin_pin: secret(TEST_ADMIN_PIN),
        jwt_secret: secret(TEST_JWT_SECRET),
        admin_session_ttl: Duration::minutes(10),
    }
}

/// State plus handles to the mocks behind it.
pub struct TestApp {
    pub state: AppState,
    pub repo: Arc<InMemoryWaitlistRepo>,
    pub mail_relay: Arc<RecordingMailRelay>,
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// ```ignore
/// let app = TestAppStateBuilder::new()
///     .with_entries(vec![create_test_entry(|_| {})])
///     .with_failing_notifier()
///     .build();
/// let server = TestServer::new(router().with_state(app.state)).unwrap();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    storage_failure: Option<StorageFailure>,
    notifier_fails: bool,
    relay_failure: Option<String>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_storage_failure(mut self, failure: StorageFailure) -> Self {
        self.storage_failure = Some(failure);
        self
    }

    pub fn with_failing_notifier(mut self) -> Self {
        self.notifier_fails = true;
        self
    }

    pub fn with_failing_mail_relay(mut self, details: &str) -> Self {
        self.relay_failure = Some(details.to_string());
        self
    }

    pub fn build(self) -> TestApp {
        let config = test_config();

        let repo = Arc::new(match self.storage_failure {
            Some(failure) => InMemoryWaitlistRepo::failing(failure),
            None => InMemoryWaitlistRepo::with_entries(self.entries),
        });
        let mail_relay = Arc::new(match self.relay_failure {
            Some(details) => RecordingMailRelay::failing(&details),
            None => RecordingMailRelay::new(),
        });
        let (notifier, _attempts) = if self.notifier_fails {
            RecordingWelcomeNotifier::failing()
        } else {
            RecordingWelcomeNotifier::new()
        };

        let waitlist_use_cases = WaitlistUseCases::new(repo.clone(), Arc::new(notifier));
        let mail_relay_use_cases = MailRelayUseCases::new(mail_relay.clone());
        let admin_use_cases = AdminUseCases::new(
            repo.clone(),
            config.admin_pin.clone(),
            config.jwt_secret.clone(),
            config.admin_session_ttl,
        );

        let state = AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
            mail_relay_use_cases: Arc::new(mail_relay_use_cases),
            admin_use_cases: Arc::new(admin_use_cases),
        };

        TestApp {
            state,
            repo,
            mail_relay,
        }
    }
}
