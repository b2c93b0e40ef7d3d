use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Signup origin written by the landing page form.
pub const LANDING_PAGE_SOURCE: &str = "landing_page";

/// One signup row in the `waitlist` table.
///
/// `id` and `created_at` are assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}
