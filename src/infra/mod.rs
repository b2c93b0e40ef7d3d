use crate::{adapters::persistence::PostgresPersistence, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod setup;

pub async fn postgres_persistence(
    database_url: &str,
    run_migrations: bool,
) -> anyhow::Result<PostgresPersistence> {
    let pool = init_db(database_url, run_migrations).await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}
