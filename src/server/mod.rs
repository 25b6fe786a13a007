//! HTTP surface for the local editor.

mod error;
mod handlers;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::app::config::AppConfig;
use crate::domain::AppError;
use crate::ports::{DocumentStore, GitPort};

pub use error::{ApiError, ApiResult};
pub use handlers::{SectionsRequest, SharedContext, StatusResponse};

/// Build the application router over a shared context.
pub fn router<S, G>(ctx: SharedContext<S, G>) -> Router
where
    S: DocumentStore + 'static,
    G: GitPort + 'static,
{
    Router::new()
        .route("/", get(handlers::index))
        .route("/admin", get(handlers::admin::<S, G>).post(handlers::save_portfolio::<S, G>))
        .route("/explain", get(handlers::explain::<S, G>))
        .route("/api/portfolio", get(handlers::get_portfolio::<S, G>))
        .route("/api/schemes", get(handlers::list_schemes))
        .route("/api/sections", post(handlers::update_sections::<S, G>))
        .route("/preview", get(handlers::preview::<S, G>))
        .route("/generate", post(handlers::generate::<S, G>))
        .route("/deploy", post(handlers::deploy::<S, G>))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn serve<S, G>(config: &AppConfig, ctx: SharedContext<S, G>) -> Result<(), AppError>
where
    S: DocumentStore + 'static,
    G: GitPort + 'static,
{
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, root = %config.root.display(), "Portfolio builder listening");
    println!("Portfolio builder running at http://{addr}/admin (Ctrl+C to stop)");

    axum::serve(listener, router(ctx)).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for Ctrl+C");
    }
}
