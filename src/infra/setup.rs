use crate::{
    adapters::{
        email::{smtp::SmtpMailRelay, welcome_notifier::HttpWelcomeNotifier},
        http::app_state::AppState,
    },
    infra::{config::AppConfig, postgres_persistence},
    use_cases::{
        admin::AdminUseCases, mail_relay::MailRelayUseCases,
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc =
        Arc::new(postgres_persistence(&config.database_url, config.run_migrations).await?);
    let waitlist_repo = postgres_arc.clone() as Arc<dyn WaitlistRepo>;

    let mail_relay = Arc::new(SmtpMailRelay::new(
        &config.smtp_host,
        config.email_user.clone(),
        &config.email_pass,
        &config.email_from,
    )?);
    let notifier = Arc::new(HttpWelcomeNotifier::new(config.welcome_relay_url.clone()));

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo.clone(), notifier);
    let mail_relay_use_cases = MailRelayUseCases::new(mail_relay);
    let admin_use_cases = AdminUseCases::new(
        waitlist_repo,
        config.admin_pin.clone(),
        config.jwt_secret.clone(),
        config.admin_session_ttl,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        mail_relay_use_cases: Arc::new(mail_relay_use_cases),
        admin_use_cases: Arc::new(admin_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); console only if the file can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
