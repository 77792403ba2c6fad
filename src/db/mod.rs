pub(crate) mod models;
pub(crate) mod types;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use crate::core::config::Settings;

/// Bounded pool shared by all handlers. Once every connection is checked out,
/// callers wait up to the acquire timeout instead of failing immediately.
pub(crate) async fn init_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    pool_options(settings).connect_with(connect_options(settings)?).await
}

/// Same pool, but no connection is opened until the first query.
pub(crate) fn init_pool_lazy(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    Ok(pool_options(settings).connect_lazy_with(connect_options(settings)?))
}

fn connect_options(settings: &Settings) -> Result<PgConnectOptions, sqlx::Error> {
    let database = settings.database();
    let options: PgConnectOptions = database.database_url().parse()?;

    Ok(options
        .ssl_mode(database.ssl_mode)
        .application_name("studyhub-api")
        .log_statements(tracing::log::LevelFilter::Off))
}

fn pool_options(settings: &Settings) -> PgPoolOptions {
    let database = settings.database();
    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .acquire_timeout(Duration::from_secs(database.acquire_timeout_seconds))
        .test_before_acquire(true)
}
