//! Builder-style options used when opening a vocabulary store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STORE_FILE;

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

/// What to do when the store file exists but cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Log the failure and start with an empty list.
    #[default]
    Lenient,
    /// Refuse to open and surface the decode error.
    Strict,
}

/// Tunable options for opening a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// Rotate the existing file to a numbered backup and start empty.
    #[serde(default)]
    pub overwrite_existing: bool,
    #[serde(default)]
    pub load_policy: LoadPolicy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            overwrite_existing: false,
            load_policy: LoadPolicy::default(),
        }
    }
}

impl StoreOptions {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Start a fluent builder for `StoreOptions`.
    #[must_use]
    pub fn builder() -> StoreOptionsBuilder {
        StoreOptionsBuilder::default()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreOptionsBuilder {
    inner: StoreOptions,
}

impl StoreOptionsBuilder {
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner.path = path.into();
        self
    }

    #[must_use]
    pub fn overwrite_existing(mut self, overwrite: bool) -> Self {
        self.inner.overwrite_existing = overwrite;
        self
    }

    #[must_use]
    pub fn load_policy(mut self, policy: LoadPolicy) -> Self {
        self.inner.load_policy = policy;
        self
    }

    #[must_use]
    pub fn build(self) -> StoreOptions {
        self.inner
    }
}
