use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{CatalogService, SeaOrmCatalogService};
use crate::state::SharedState;

mod error;
mod tvshow;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::{ErrorBody, TvShowDto};

use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn CatalogService> {
        &self.catalog
    }
}

pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    let catalog = Arc::new(SeaOrmCatalogService::new(Arc::new(shared.store.clone())));

    Arc::new(AppState { shared, catalog })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config().read().await;
        config.server.cors_allowed_origins.clone()
    };

    let tvshow_routes = Router::new()
        .route("/create", post(tvshow::create_tvshow))
        .route("/all", get(tvshow::list_tvshows))
        .route("/detail/{show_id}", get(tvshow::get_tvshow))
        .route("/genre/{genre}", get(tvshow::search_tvshows_by_genre))
        .route("/update/{show_id}", put(tvshow::update_tvshow))
        .route("/delete/{show_id}", delete(tvshow::delete_tvshow));

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/tvshow", tvshow_routes)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
