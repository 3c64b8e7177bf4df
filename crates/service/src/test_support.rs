#![cfg(test)]
use tokio::sync::{Mutex, MutexGuard, OnceCell};
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::connect_with_config;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

// Tests asserting exact table contents hold this for their whole body
static TABLE_LOCK: Mutex<()> = Mutex::const_new(());

pub async fn lock_tables() -> MutexGuard<'static, ()> {
    TABLE_LOCK.lock().await
}

/// Connection to the test database, or `None` when `DATABASE_URL` is unset
/// or `SKIP_DB_TESTS` is present.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }

    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let cfg = DatabaseConfig::from_env();
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    let mut cfg = DatabaseConfig::from_env();
    cfg.max_connections = cfg.max_connections.max(20);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    Ok(Some(db))
}
