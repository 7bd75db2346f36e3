use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::CatalogService;

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{ads, games, health};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, catalog: CatalogService) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        catalog,
        config: config.clone(),
    };

    let cors = cors_layer(&config.security.cors_origins);

    let catalog_routes = Router::new()
        .route(
            "/api/v1/games",
            get(games::list_games).post(games::create_game),
        )
        .route(
            "/api/v1/games/:game_id/ads",
            get(ads::list_ads).post(ads::create_ad),
        )
        .route("/api/v1/ads/:ad_id/discord", get(ads::get_ad_discord));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Bottom layers run first.
    Router::new()
        .merge(public_routes)
        .merge(catalog_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

/// Any origin when none are configured, otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
