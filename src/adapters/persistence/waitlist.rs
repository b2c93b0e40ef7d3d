use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, email: &str, source: &str) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"INSERT INTO waitlist (email, source)
               VALUES ($1, $2)
               RETURNING id, email, source, created_at"#,
        )
        .bind(email)
        .bind(source)
        .fetch_one(self.pool())
        .await?;

        Ok(rec)
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        let recs = sqlx::query_as::<_, WaitlistEntry>(
            r#"SELECT id, email, source, created_at
               FROM waitlist
               ORDER BY created_at DESC"#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(recs)
    }
}
