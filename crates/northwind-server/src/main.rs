//! # Northwind REST Server
//!
//! Main entry point: loads configuration, binds the data-access factory to
//! the configured store, wires the management services, and serves the REST
//! API until SIGINT/SIGTERM.

use northwind_config::ConfigLoader;
use northwind_core::{NorthwindError, NorthwindResult};
use northwind_dao::DataAccessFactory;
use northwind_rest::{create_router, AppState};
use northwind_service::{
    BloggingServiceImpl, CategoryServiceImpl, EmployeeServiceImpl, ProductServiceImpl,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Northwind REST Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> NorthwindResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Bind the data access factory to the configured store
    let factory = DataAccessFactory::connect(&config.database).await?;
    factory.run_migrations().await?;
    factory.health_check().await?;

    // Wire the management services
    let app_state = AppState::new(
        Arc::new(EmployeeServiceImpl::new(factory.employee_dao())),
        Arc::new(ProductServiceImpl::new(factory.product_dao())),
        Arc::new(CategoryServiceImpl::new(factory.category_dao())),
        Arc::new(BloggingServiceImpl::new(
            factory.blog_article_dao(),
            factory.blog_comment_dao(),
            factory.blog_article_product_dao(),
        )),
    );

    // Create the REST router
    let router = create_router(app_state, &config.server);

    // Start the server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NorthwindError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NorthwindError::Internal(format!("Server error: {}", e)))?;

    factory.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,northwind=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
