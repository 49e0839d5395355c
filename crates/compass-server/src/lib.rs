//! # compass-server
//!
//! HTTP surface for roadmap generation and persistence.
//!
//! | Method | Path | |
//! |--------|------|-|
//! | POST | `/api/v1/roadmaps/generate` | generate without saving |
//! | POST | `/api/v1/roadmaps/save` | persist for the caller |
//! | GET | `/api/v1/roadmaps` | caller's saved roadmaps |
//! | GET/DELETE | `/api/v1/roadmaps/{id}` | one saved roadmap |
//! | GET | `/api/v1/health` | liveness |

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/v1/roadmaps/generate", post(routes::roadmaps::generate))
        .route("/api/v1/roadmaps/save", post(routes::roadmaps::save))
        .route("/api/v1/roadmaps", get(routes::roadmaps::list))
        .route(
            "/api/v1/roadmaps/{id}",
            get(routes::roadmaps::get).delete(routes::roadmaps::delete),
        )
        .route("/api/v1/health", get(routes::health::health))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `address` and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, address: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!(address = %listener.local_addr()?, "server running");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(%e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!(%e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
