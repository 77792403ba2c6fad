use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::Settings;

/// Per-process handles shared by every handler. Holds no entity data.
#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: PgPool,
}

impl AppState {
    pub(crate) fn new(settings: Settings, db: PgPool) -> Self {
        Self { inner: Arc::new(InnerState { settings, db }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &PgPool {
        &self.inner.db
    }
}
