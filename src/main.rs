use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use ingest_serve::config::ServiceConfig;
use ingest_serve::logging;
use ingest_serve::server::handler::router;
use ingest_serve::store::digest_store::DigestStore;

/// HTTP service for downloading ingested text files by digest id.
#[derive(Debug, Parser)]
#[command(name = "ingest-serve", version, about)]
struct Args {
    /// Directory under which each digest id maps to a subdirectory.
    #[arg(long, env = "DIGEST_ROOT", default_value = "/tmp/ingest")]
    digest_root: PathBuf,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let config = ServiceConfig {
        digest_root: args.digest_root,
        bind_addr: args.bind,
    };

    let store = Arc::new(DigestStore::new(config.digest_root));
    let app = router(store);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
