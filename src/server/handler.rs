// Axum request handler — translates download requests into digest store reads.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::store::digest_store::DigestStore;

/// Build the service router around a shared digest store.
pub fn router(store: Arc<DigestStore>) -> Router {
    Router::new()
        .route("/download/{digest_id}", get(download_handler))
        .with_state(store)
}

pub struct DownloadServer {
    port: u16,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl DownloadServer {
    /// Start the server on a random local port, returning a handle.
    pub async fn start(store: Arc<DigestStore>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let app = router(store);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        Ok(Self {
            port,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Build a URL for downloading a specific digest.
    pub fn url_for_digest(&self, digest_id: &str) -> String {
        format!("http://127.0.0.1:{}/download/{}", self.port, digest_id)
    }

    /// Shutdown the server gracefully.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// GET /download/{digest_id} — serve the digest's text file as an attachment.
async fn download_handler(
    State(store): State<Arc<DigestStore>>,
    Path(digest_id): Path<String>,
) -> Response {
    let stored = match store.load(&digest_id).await {
        Ok(stored) => stored,
        Err(e) => return e.into_response(),
    };

    let body_len = stored.content.len();
    info!(
        "download served digest_id={} file={} bytes={}",
        digest_id, stored.filename, body_len
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", stored.filename),
            ),
            (header::CONTENT_LENGTH, body_len.to_string()),
        ],
        stored.content,
    )
        .into_response()
}
