use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use travel_recs_http::{AppState, create_router};
use travel_recs_service::RecommendationService;

pub(crate) async fn run(data: &Path, port: u16, host: String) -> Result<()> {
    // A broken dataset leaves the server up in degraded mode.
    let recommendations = Arc::new(RecommendationService::load(data));
    if !recommendations.is_ready() {
        tracing::warn!(
            path = %data.display(),
            "Travel data unavailable; recommendation requests will fail until restart"
        );
    }

    let state = Arc::new(AppState::new(recommendations));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
