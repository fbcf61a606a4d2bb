use axum::{routing::get, Router};
use tracing::info;

const STATUS_TEXT: &str = "Bot is running!";

/// Liveness routes for the hosting platform. Both paths answer with the
/// same constant body and carry no business logic.
pub fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    STATUS_TEXT
}

pub async fn serve(port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("health check server started on port {port}");
    axum::serve(listener, router()).await
}
