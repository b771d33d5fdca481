//! Log output for `vocab-server`: formatted events on stdout, mirrored to an
//! append-only log file.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Layer writing plain-text events to `path`, appending to existing content.
pub fn file_layer(path: &Path) -> io::Result<Box<dyn Layer<Registry> + Send + Sync>> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .boxed())
}

/// Installs the global subscriber. `RUST_LOG` selects the level, default `info`.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = log_file.map(file_layer).transpose()?;
    tracing_subscriber::registry()
        .with(file)
        .with(fmt::layer())
        .with(env_filter)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn events_are_appended_to_the_log_file() {
        let dir = tempdir().expect("tmp");
        let path = dir.path().join("api.log");
        std::fs::write(&path, "earlier run\n").expect("seed log");

        let subscriber = tracing_subscriber::registry().with(file_layer(&path).expect("open log"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "vocab::server", words = 3, "vocabulary loaded");
        });

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert!(contents.starts_with("earlier run\n"), "{contents}");
        assert!(contents.contains("vocabulary loaded"), "{contents}");
        assert!(contents.contains("words=3"), "{contents}");
        assert!(!contents.contains('\u{1b}'), "no colour codes in the file");
    }

    #[test]
    fn missing_log_directory_is_an_error() {
        let dir = tempdir().expect("tmp");
        let path = dir.path().join("missing").join("api.log");
        assert!(file_layer(&path).is_err());
    }
}
