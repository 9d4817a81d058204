/// HTTP surface for the flexibility engine
///
/// Thin JSON seam for external presentation layers: scenarios in, derived
/// curves and crossing results out. No rendering or layout concerns live
/// here.

pub mod error;
pub mod health;
pub mod v1;

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .nest("/api/v1", v1::router(state));

    if cfg.server.enable_cors {
        use tower_http::cors::CorsLayer;
        let cors = CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router.layer(
        ServiceBuilder::new()
            .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
            .layer(TimeoutLayer::new(Duration::from_secs(
                cfg.server.request_timeout_secs,
            ))),
    )
    .layer(TraceLayer::new_for_http())
}
