//! Durable encoding of the vocabulary list.
//!
//! The store file is a pretty-printed JSON array rewritten in full on every save.
//! Writes go to a temporary sibling that is renamed over the target, so a crash
//! mid-write leaves the previous contents in place.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::constants::{LOAD_PREVIEW_WORDS, STORE_JSON_INDENT};
use crate::error::{Result, VocabError};
use crate::types::{SchemaVersion, Word, decode_words};

/// Words read from disk plus the schema they were stored in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedWords {
    pub words: Vec<Word>,
    /// `None` when the file was missing or blank.
    pub schema: Option<SchemaVersion>,
}

impl LoadedWords {
    #[must_use]
    pub fn needs_migration(&self) -> bool {
        self.schema.is_some_and(SchemaVersion::needs_migration)
    }
}

/// Handle on the single JSON file backing a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the store, degrading every failure to an empty list.
    #[must_use]
    pub fn load(&self) -> LoadedWords {
        match self.load_checked() {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(
                    target: "vocab::io",
                    path = %self.path.display(),
                    error = %err,
                    "the given file does not contain a valid vocabulary; starting empty"
                );
                LoadedWords::default()
            }
        }
    }

    /// Reads the store. A missing or blank file is an empty list; unreadable or
    /// undecodable content is an error.
    pub fn load_checked(&self) -> Result<LoadedWords> {
        let bytes = match fs_err::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    target: "vocab::io",
                    path = %self.path.display(),
                    "no vocabulary found; creating a new one"
                );
                return Ok(LoadedWords::default());
            }
            Err(err) => return Err(err.into()),
        };

        let decoded = decode_words(&bytes)?;
        if decoded.is_mixed() {
            tracing::warn!(
                target: "vocab::io",
                path = %self.path.display(),
                records = decoded.len(),
                "some records carry no scores; missing scores start at zero"
            );
        }
        let schema = decoded.schema();
        let words = decoded.into_current();
        tracing::info!(
            target: "vocab::io",
            path = %self.path.display(),
            words = words.len(),
            schema = ?schema,
            "vocabulary loaded"
        );
        tracing::debug!(
            target: "vocab::io",
            preview = ?&words[..words.len().min(LOAD_PREVIEW_WORDS)],
            "loaded words"
        );
        Ok(LoadedWords { words, schema })
    }

    /// Replaces the file contents with `words`.
    pub fn save(&self, words: &[Word]) -> Result<()> {
        let bytes = encode_words(words)?;
        self.write_atomic(&bytes)
            .map_err(|source| VocabError::Persistence {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            target: "vocab::io",
            path = %self.path.display(),
            words = words.len(),
            bytes = bytes.len(),
            "vocabulary stored"
        );
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let mut file = AtomicWriteFile::options().open(&self.path)?;
        file.write_all(bytes)?;
        file.commit()
    }
}

/// Serialises `words` as tab-indented JSON in stable field order.
pub fn encode_words(words: &[Word]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(STORE_JSON_INDENT));
    words.serialize(&mut serializer)?;
    Ok(buf)
}
