//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // API v1
        .nest("/api/v1", api_v1_routes())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Root finding
        .route("/roots/bisection", post(routes::roots::bisection_handler))
        .route("/roots/newton", post(routes::roots::newton_handler))
        .route("/roots/compare", post(routes::roots::compare))
        // Regression
        .route("/datasets", get(routes::regression::list_datasets))
        .route("/regression", post(routes::regression::fit))
        // Allocation
        .route("/budget", post(routes::budget::budget))
        // Linear systems
        .route("/systems/solve", post(routes::systems::solve_system))
}

/// Run the server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Numlab API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/roots/bisection");
    tracing::info!("  POST /api/v1/roots/newton");
    tracing::info!("  POST /api/v1/roots/compare");
    tracing::info!("  GET  /api/v1/datasets");
    tracing::info!("  POST /api/v1/regression");
    tracing::info!("  POST /api/v1/budget");
    tracing::info!("  POST /api/v1/systems/solve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
