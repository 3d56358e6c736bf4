use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::CatsStorage;
use crate::error::CatformError;
use crate::handlers::cats::{index_handler, write_db_handler};
use crate::views::Views;

#[derive(Clone)]
pub struct CatformState {
    pub storage: CatsStorage,
    pub views: Views,
}

impl CatformState {
    pub fn new(storage: CatsStorage, views: Views) -> Self {
        Self { storage, views }
    }

    /// Connect, create the schema once, and load templates.
    pub async fn from_config(cfg: &Config) -> Result<Self, CatformError> {
        let storage =
            CatsStorage::connect(&cfg.basic.database_url, cfg.basic.max_connections).await?;
        storage.init_schema().await?;

        let views = match cfg.basic.templates_dir.as_deref() {
            Some(dir) => Views::with_overrides(dir)?,
            None => Views::bundled()?,
        };
        Ok(Self::new(storage, views))
    }
}

pub fn catform_router(state: CatformState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/write-db", post(write_db_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
