use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::pending_tester::{DatabasePendingTesterStore, FilePendingTesterStore, PendingTesterStore},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - SQLite connection string, e.g. `sqlite://stacker.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Opens the pending tester store selected by configuration.
///
/// Uses the database when `DATABASE_URL` is set, otherwise the flat file at
/// `PENDING_TESTERS_PATH`.
pub async fn connect_pending_tester_store(
    config: &Config,
) -> Result<Arc<dyn PendingTesterStore>, AppError> {
    match &config.database_url {
        Some(database_url) => {
            let db = connect_to_database(database_url).await?;
            tracing::info!("Pending testers are stored in the database");

            Ok(Arc::new(DatabasePendingTesterStore::new(db)))
        }
        None => {
            tracing::info!(
                "Pending testers are stored in {}",
                config.pending_testers_path.display()
            );

            Ok(Arc::new(FilePendingTesterStore::new(
                config.pending_testers_path.clone(),
            )))
        }
    }
}
