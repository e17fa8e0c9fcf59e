#![forbid(unsafe_code)]

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use joker_dataset::Joker;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;

pub use config::{load_config, validate_startup_config, AppConfig, ConfigError};

pub const CRATE_NAME: &str = "joker-server";

#[derive(Clone)]
pub struct AppState {
    pub joker: Arc<Joker>,
    pub api: Arc<AppConfig>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(joker: Arc<Joker>, api: AppConfig) -> Self {
        Self {
            joker,
            api: Arc::new(api),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/api/v1/version", get(http::handlers::version_handler))
        .route(
            "/api/v1/jokes/id/:joke_id",
            get(http::handlers::joke_by_id_handler),
        )
        .route(
            "/api/v1/jokes/:language/:category/all",
            get(http::handlers::jokes_all_handler),
        )
        .route(
            "/api/v1/jokes/:language/:category/:number",
            get(http::handlers::jokes_sample_handler),
        )
        .fallback(http::handlers::not_found_handler)
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .with_state(state)
}
