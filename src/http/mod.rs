pub mod payload;
pub mod response;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use routes::{contact_handler, health_handler, inquiries_handler, projects_handler};
pub use state::AppState;

pub const ENDPOINTS: &[&str] = &[
    "POST /api/contact - Submit inquiry",
    "GET /api/projects/{category} - Get projects by category",
    "GET /api/inquiries - View all inquiries",
    "GET /api/health - Health check",
    "GET /* - Serve single-page app",
];

/// API routes plus the built front end; unknown paths get `index.html` for client-side routing.
pub fn build_router(state: Arc<AppState>, dist_dir: impl AsRef<Path>) -> Router {
    let dist_dir = dist_dir.as_ref();
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/api/contact", post(contact_handler))
        .route("/api/projects/{category}", get(projects_handler))
        .route("/api/inquiries", get(inquiries_handler))
        .route("/api/health", get(health_handler))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
