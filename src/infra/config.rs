use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use time::Duration;
use url::Url;

const DEFAULT_EMAIL_FROM: &str = "\"Daniel @ The Bridge\" <danielnicholasdibal@gmail.com>";
const DEFAULT_WELCOME_RELAY_URL: &str = "http://127.0.0.1:3001/api/email";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Apply the bundled migrations on startup.
    pub run_migrations: bool,
    /// SMTP relay account, used only by the mail-relay endpoint.
    pub email_user: String,
    pub email_pass: SecretString,
    pub smtp_host: String,
    pub email_from: String,
    /// Where signups ask for their welcome email. Usually this service's own `/api/email`.
    pub welcome_relay_url: Url,
    pub admin_pin: SecretString,
    pub jwt_secret: SecretString,
    pub admin_session_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let database_url: String = get_env("DATABASE_URL");
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);

        let email_user: String = get_env("EMAIL_USER");
        let email_pass: SecretString = SecretString::new(get_env::<String>("EMAIL_PASS").into());
        let smtp_host: String = get_env_default("SMTP_HOST", "smtp.gmail.com".to_string());
        let email_from: String = get_env_default("EMAIL_FROM", DEFAULT_EMAIL_FROM.to_string());
        let welcome_relay_url: Url =
            get_env_default("WELCOME_RELAY_URL", DEFAULT_WELCOME_RELAY_URL.to_string())
                .parse()
                .expect("WELCOME_RELAY_URL must be a valid URL");

        let admin_pin: SecretString = SecretString::new(get_env::<String>("ADMIN_PIN").into());
        let jwt_secret: SecretString = SecretString::new(get_env::<String>("JWT_SECRET").into());
        let admin_session_ttl_secs: i64 = get_env_default("ADMIN_SESSION_TTL_SECS", 3600);

        Self {
            bind_addr,
            database_url,
            run_migrations,
            email_user,
            email_pass,
            smtp_host,
            email_from,
            welcome_relay_url,
            admin_pin,
            jwt_secret,
            admin_session_ttl: Duration::seconds(admin_session_ttl_secs),
        }
    }
}
