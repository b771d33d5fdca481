//! Read-only access to the word list. Readers share the lock.

use super::lifecycle::VocabStore;
use crate::error::{Result, VocabError};
use crate::types::{Word, WordId};

impl VocabStore {
    /// Snapshot of the full list.
    #[must_use]
    pub fn list(&self) -> Vec<Word> {
        self.words.read().clone()
    }

    /// The word whose `id` field equals `id`.
    pub fn get(&self, id: WordId) -> Result<Word> {
        self.words
            .read()
            .iter()
            .find(|word| word.id == id)
            .cloned()
            .ok_or(VocabError::NotFound { id })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }
}
