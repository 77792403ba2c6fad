pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod repositories;
pub(crate) mod schemas;

#[cfg(test)]
mod test_support;

use axum::{extract::Request, ServiceExt};
use sqlx::PgPool;

use crate::core::{config::Settings, state::AppState, telemetry};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    // No connection is opened here; an unreachable database only fails the
    // requests and the bootstrap that need it.
    let db_pool = db::init_pool_lazy(&settings)?;

    let state = AppState::new(settings, db_pool.clone());
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        "StudyHub API listening"
    );

    tokio::spawn(async move {
        if let Err(err) = bootstrap(&db_pool).await {
            tracing::error!(error = %err, "Database bootstrap failed; serving anyway");
        }
    });

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(core::shutdown::shutdown_signal())
        .await?;

    Ok(())
}

/// Creates missing tables and columns and seeds empty reference tables.
pub async fn bootstrap(pool: &PgPool) -> anyhow::Result<()> {
    let report = core::bootstrap::ensure_schema(pool).await?;
    tracing::info!(
        columns_added = ?report.columns_added,
        tasks_seeded = report.tasks_seeded,
        courses_seeded = report.courses_seeded,
        "Database tables initialized"
    );
    Ok(())
}
