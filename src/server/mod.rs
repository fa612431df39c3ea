pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OllamaClient};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .route("/test-intents", post(handlers::test_intents))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    info!(
        "Relaying to {} using model {}",
        config.inference.base_url, config.inference.model
    );

    let inference = OllamaClient::new(config.inference.clone())?;
    let app = router(AppState::new(Arc::new(inference)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
