//! HTTP proxy server
//!
//! Routes browser requests to the travel and logo APIs, keeping every
//! upstream credential on the server.

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

pub mod assets;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ProxyError;
pub use state::AppState;

use crate::error::Result;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/profile", get(assets::profile_page))
        .route("/assets/{file}", get(assets::asset))
        .route("/airlines.json", get(handlers::airlines))
        .route("/search-flights", post(handlers::search_flights))
        .route("/autocomplete", get(handlers::autocomplete))
        .route("/logo/{domain}", get(handlers::logo))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let address = format!("0.0.0.0:{}", port);
    log::info!("Binding to {}", address);

    let listener = TcpListener::bind(&address).await?;
    log::info!("Server running on http://localhost:{}", port);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
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
