//! HTTP front end for a single vocabulary store file.

use std::sync::Arc;

use clap::Parser;
use vocab_store::VocabStore;
use vocab_store::server::{ServerConfig, logging, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init(config.log_file())?;

    let options = config.store_options();
    let store = VocabStore::open(&options)?;
    tracing::info!(
        target: "vocab::server",
        path = %options.path().display(),
        words = store.len(),
        "vocabulary loaded"
    );

    serve(Arc::new(store), config.socket_addr()).await?;
    Ok(())
}
