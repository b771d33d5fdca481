//! Numbered backups of the store file.
//!
//! Rotation copies `vocabulary.json` to the first free `vocabulary_<n>.json` and then
//! truncates the active file, so the next open starts from an empty list.

use std::path::{Path, PathBuf};

use super::codec::StoreFile;
use crate::constants::FIRST_BACKUP_INDEX;
use crate::error::Result;

/// Backup name for `path` with suffix `index`: `dir/stem_<index>.ext`.
#[must_use]
pub fn backup_path_for(path: &Path, index: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index}"),
    };
    path.with_file_name(name)
}

/// First backup name for `path` that does not exist yet.
#[must_use]
pub fn next_backup_path(path: &Path) -> PathBuf {
    let mut index = FIRST_BACKUP_INDEX;
    loop {
        let candidate = backup_path_for(path, index);
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}

impl StoreFile {
    /// Moves the current contents to the next numbered backup and empties the file.
    ///
    /// Returns the backup path, or `None` when there was no file to rotate. An
    /// existing empty file is still rotated.
    pub fn rotate(&self) -> Result<Option<PathBuf>> {
        if !self.exists() {
            tracing::info!(
                target: "vocab::io",
                path = %self.path().display(),
                "vocabulary file does not exist; nothing to rotate"
            );
            return Ok(None);
        }

        let backup = next_backup_path(self.path());
        fs_err::copy(self.path(), &backup)?;
        fs_err::File::create(self.path())?;
        tracing::info!(
            target: "vocab::io",
            path = %self.path().display(),
            backup = %backup.display(),
            "rotated existing vocabulary"
        );
        Ok(Some(backup))
    }
}
