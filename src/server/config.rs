use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_STORE_FILE};
use crate::types::{LoadPolicy, StoreOptions};

/// Command line and environment configuration for `vocab-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "vocab-server")]
#[command(about = "Serve a personal vocabulary store over HTTP")]
#[command(version)]
pub struct ServerConfig {
    /// Listen address
    #[arg(short, long, env = "VOCAB_ADDRESS", default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Listen port
    #[arg(short, long, env = "VOCAB_PORT", default_value_t = 50000)]
    pub port: u16,

    /// Path to the vocabulary store file
    #[arg(short, long, env = "VOCAB_STORE", default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Move the existing store to a numbered backup and start empty
    #[arg(short, long)]
    pub overwrite: bool,

    /// Refuse to start when the store file cannot be decoded
    #[arg(long)]
    pub strict_load: bool,

    /// File that receives a copy of every log line
    #[arg(short, long, env = "VOCAB_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log to stdout only
    #[arg(long)]
    pub no_log_file: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        (!self.no_log_file).then_some(self.log_file.as_path())
    }

    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        let policy = if self.strict_load {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        };
        StoreOptions::builder()
            .path(&self.store)
            .overwrite_existing(self.overwrite)
            .load_policy(policy)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_service() {
        let config = ServerConfig::parse_from(["vocab-server"]);
        assert_eq!(config.socket_addr(), "0.0.0.0:50000".parse().unwrap());
        let options = config.store_options();
        assert_eq!(options.path, PathBuf::from("vocabulary.json"));
        assert!(!options.overwrite_existing);
        assert_eq!(options.load_policy, LoadPolicy::Lenient);
        assert_eq!(config.log_file(), Some(Path::new("api.log")));
    }

    #[test]
    fn log_file_can_be_moved_or_disabled() {
        let config = ServerConfig::parse_from(["vocab-server", "--no-log-file"]);
        assert_eq!(config.log_file(), None);
        let config = ServerConfig::parse_from(["vocab-server", "-l", "/var/log/vocab.log"]);
        assert_eq!(config.log_file(), Some(Path::new("/var/log/vocab.log")));
    }

    #[test]
    fn short_flags_map_to_store_options() {
        let config = ServerConfig::parse_from([
            "vocab-server",
            "-a",
            "127.0.0.1",
            "-p",
            "50002",
            "-s",
            "/tmp/words.json",
            "-o",
            "--strict-load",
        ]);
        assert_eq!(config.socket_addr(), "127.0.0.1:50002".parse().unwrap());
        let options = config.store_options();
        assert_eq!(options.path, PathBuf::from("/tmp/words.json"));
        assert!(options.overwrite_existing);
        assert_eq!(options.load_policy, LoadPolicy::Strict);
    }
}
