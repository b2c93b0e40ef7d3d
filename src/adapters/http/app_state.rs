use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    infra::config::AppConfig,
    use_cases::{admin::AdminUseCases, mail_relay::MailRelayUseCases, waitlist::WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub mail_relay_use_cases: Arc<MailRelayUseCases>,
    pub admin_use_cases: Arc<AdminUseCases>,
}

impl FromRef<AppState> for Arc<WaitlistUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.waitlist_use_cases.clone()
    }
}
