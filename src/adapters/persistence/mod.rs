use sqlx::PgPool;

use crate::app_error::AppError;

pub mod waitlist;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Message-based fallback for drivers or proxies that drop the SQLSTATE.
fn is_duplicate_message(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("duplicate") || msg.contains("unique")
}

fn is_unique_violation(code: Option<&str>, msg: &str) -> bool {
    code == Some(UNIQUE_VIOLATION) || is_duplicate_message(msg)
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                if is_unique_violation(db_err.code().as_deref(), db_err.message()) {
                    AppError::Duplicate
                } else {
                    // Log the actual error for debugging, but don't expose details
                    tracing::error!(error = ?err, "Database error");
                    AppError::Database("Database operation failed".into())
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => {
                tracing::error!(error = ?err, "Database unreachable");
                AppError::Network(err.to_string())
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
