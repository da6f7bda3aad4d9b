//! Main application router.

use crate::{
    controllers::{
        blog_controller, category_controller, employee_controller, health_controller,
        product_controller,
    },
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use northwind_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .nest("/employees", employee_controller::router())
        .nest("/products", product_controller::router())
        .nest("/categories", category_controller::router())
        .nest("/articles", blog_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints outside the API prefix
        .merge(health_controller::router())
        .nest("/api", api_router)
        // Root endpoint
        .route("/", get(root))
        // Middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(RequestBodyLimitLayer::new(server_config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Northwind REST API"
}
