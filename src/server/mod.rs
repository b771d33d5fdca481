//! HTTP adapter for the vocabulary store.
//!
//! # Endpoints
//!
//! - `GET /words` - full list
//! - `GET /words/{id}` - one word
//! - `POST /words` - append a word
//! - `POST /words/{id}` - edit term and translation
//! - `DELETE /words/{id}` - remove; the body must repeat the stored word
//! - `POST /scores` - apply a batch of review scores
//! - `GET /health` - liveness and word count
//!
//! Handlers decode the request, call one store operation, and map [`VocabError`]
//! to a status code. Store calls block for the duration of their file write.
//!
//! [`VocabError`]: crate::VocabError

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::HealthResponse;

use crate::vocab::VocabStore;

/// Store handle shared by all handlers.
pub type SharedStore = Arc<VocabStore>;

pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .route("/words", get(routes::list_words).post(routes::add_word))
        .route(
            "/words/{id}",
            get(routes::get_word)
                .post(routes::update_word)
                .delete(routes::remove_word),
        )
        .route("/scores", post(routes::rescore_words))
        .route("/health", get(routes::health))
        .with_state(store)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn serve(store: SharedStore, addr: SocketAddr) -> std::io::Result<()> {
    let router = create_router(store);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(target: "vocab::server", %addr, "vocabulary server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(target: "vocab::server", "vocabulary server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!(target: "vocab::server", "received Ctrl+C, shutting down"),
            Err(err) => {
                tracing::error!(target: "vocab::server", error = %err, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!(target: "vocab::server", "received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!(target: "vocab::server", error = %err, "failed to install signal handler");
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
