use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::probe::{HostProbe, SystemProbe};
use crate::store::{PgStore, UserStore};

/// Shared handler context. Passed explicitly through axum state rather than
/// living in a global.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub store: Arc<dyn UserStore>,
    pub probe: Arc<dyn HostProbe>,
}

impl AppState {
    pub async fn new(cfg: Config) -> Result<Self> {
        let store = PgStore::connect(&cfg.db).await?;
        store.ensure_schema().await?;

        Ok(Self {
            cfg,
            store: Arc::new(store),
            probe: Arc::new(SystemProbe),
        })
    }

    /// Assemble a state from pre-built parts. Used by tests to inject fakes.
    pub fn from_parts(cfg: Config, store: Arc<dyn UserStore>, probe: Arc<dyn HostProbe>) -> Self {
        Self { cfg, store, probe }
    }
}
