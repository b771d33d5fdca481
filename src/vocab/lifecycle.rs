//! Lifecycle management for opening vocabulary stores.
//!
//! Responsibilities:
//! - Rotate the previous file to a numbered backup when asked to start over.
//! - Load the persisted list under the configured [`LoadPolicy`], migrating V1 data.
//! - Re-derive dense ids and write the repaired list back when anything changed.

use std::path::Path;

use parking_lot::RwLock;

use super::mutation::reindex;
use crate::error::Result;
use crate::io::StoreFile;
use crate::types::{LoadPolicy, StoreOptions, Word};

/// Primary handle for a vocabulary list.
///
/// Owns the ordered word list behind a reader-writer lock. Reads share the lock;
/// every mutation holds it exclusively until its write to disk has completed.
/// Stores created with [`VocabStore::in_memory`] skip persistence entirely.
#[derive(Debug)]
pub struct VocabStore {
    pub(crate) words: RwLock<Vec<Word>>,
    pub(crate) file: Option<StoreFile>,
}

impl VocabStore {
    /// Open the store described by `options`, creating an empty list if the file is absent.
    pub fn open(options: &StoreOptions) -> Result<Self> {
        let file = StoreFile::new(options.path());
        if options.overwrite_existing {
            file.rotate()?;
        }

        let loaded = match options.load_policy {
            LoadPolicy::Strict => file.load_checked()?,
            LoadPolicy::Lenient => file.load(),
        };

        let migrated = loaded.needs_migration();
        let mut words = loaded.words;
        let repaired = reindex(&mut words);
        if migrated || repaired > 0 {
            tracing::info!(
                target: "vocab::store",
                path = %file.path().display(),
                migrated,
                repaired,
                "rewriting vocabulary after load"
            );
            if let Err(err) = file.save(&words) {
                tracing::warn!(
                    target: "vocab::store",
                    error = %err,
                    "failed to rewrite repaired vocabulary; keeping it in memory"
                );
            }
        }

        Ok(Self {
            words: RwLock::new(words),
            file: Some(file),
        })
    }

    /// Shorthand for [`VocabStore::open`] with default options at `path`.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(&StoreOptions::new(path.as_ref()))
    }

    /// An empty store that never touches disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_words(Vec::new())
    }

    /// A non-persistent store seeded with `words`, re-indexed densely.
    #[must_use]
    pub fn from_words(mut words: Vec<Word>) -> Self {
        reindex(&mut words);
        Self {
            words: RwLock::new(words),
            file: None,
        }
    }

    /// Path of the backing file, if the store is persistent.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(StoreFile::path)
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.file.is_some()
    }

    pub(crate) fn persist(&self, words: &[Word]) -> Result<()> {
        match &self.file {
            Some(file) => file.save(words),
            None => Ok(()),
        }
    }
}
