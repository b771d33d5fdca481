//! Vocabulary record shapes and the request payloads that target them.

use serde::{Deserialize, Serialize};

/// Dense, zero-based position of a word in the store.
pub type WordId = usize;

/// Current (V2) vocabulary record.
///
/// Field order is the on-disk order. Legacy capitalised names are accepted on decode
/// because older stores were written with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    #[serde(alias = "ID", alias = "Id")]
    pub id: WordId,
    #[serde(alias = "Term", alias = "vocabulary", alias = "Vocabulary")]
    pub term: String,
    #[serde(alias = "Translation")]
    pub translation: String,
    /// Spaced-repetition score. May be negative.
    #[serde(alias = "Confidence")]
    pub confidence: i64,
    /// Times the word was successfully reviewed. Never decreases.
    #[serde(alias = "RepeatCount", alias = "repeat", alias = "Repeat")]
    pub repeat_count: u64,
}

impl Word {
    #[must_use]
    pub fn new(id: WordId, term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            translation: translation.into(),
            confidence: 0,
            repeat_count: 0,
        }
    }
}

/// First-generation record without scoring fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordV1 {
    #[serde(alias = "ID", alias = "Id")]
    pub id: WordId,
    #[serde(alias = "Term", alias = "vocabulary", alias = "Vocabulary")]
    pub term: String,
    #[serde(alias = "Translation")]
    pub translation: String,
}

impl From<WordV1> for Word {
    fn from(word: WordV1) -> Self {
        Self {
            id: word.id,
            term: word.term,
            translation: word.translation,
            confidence: 0,
            repeat_count: 0,
        }
    }
}

/// Payload for appending a word. Any client-supplied id is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    #[serde(alias = "Term", alias = "vocabulary", alias = "Vocabulary")]
    pub term: String,
    #[serde(alias = "Translation")]
    pub translation: String,
    #[serde(default, alias = "Confidence")]
    pub confidence: i64,
    #[serde(default, alias = "RepeatCount", alias = "repeat", alias = "Repeat")]
    pub repeat_count: u64,
}

impl NewWord {
    #[must_use]
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            confidence: 0,
            repeat_count: 0,
        }
    }

    #[must_use]
    pub fn with_score(mut self, confidence: i64, repeat_count: u64) -> Self {
        self.confidence = confidence;
        self.repeat_count = repeat_count;
        self
    }

    pub(crate) fn into_word(self, id: WordId) -> Word {
        Word {
            id,
            term: self.term,
            translation: self.translation,
            confidence: self.confidence,
            repeat_count: self.repeat_count,
        }
    }
}

/// Payload for editing the text of an existing word.
///
/// `id` must repeat the addressed position; scoring fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPatch {
    #[serde(alias = "ID", alias = "Id")]
    pub id: WordId,
    #[serde(alias = "Term", alias = "vocabulary", alias = "Vocabulary")]
    pub term: String,
    #[serde(alias = "Translation")]
    pub translation: String,
}

impl WordPatch {
    #[must_use]
    pub fn new(id: WordId, term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// One entry of a rescore batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescoreEntry {
    #[serde(alias = "ID", alias = "Id")]
    pub id: WordId,
    #[serde(alias = "Confidence")]
    pub confidence: i64,
    #[serde(alias = "RepeatCount", alias = "repeat", alias = "Repeat")]
    pub repeat_count: u64,
}

/// A rescore entry that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescoreRejection {
    pub id: WordId,
    pub reason: String,
}

/// Outcome of a rescore batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RescoreReport {
    /// Store contents after the batch.
    pub words: Vec<Word>,
    /// Ids whose entry was applied, in batch order.
    pub applied: Vec<WordId>,
    pub rejected: Vec<RescoreRejection>,
}

impl RescoreReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_disk_field_order() {
        let json = serde_json::to_string(&Word::new(0, "haus", "house")).unwrap();
        assert_eq!(
            json,
            r#"{"id":0,"term":"haus","translation":"house","confidence":0,"repeatCount":0}"#
        );
    }

    #[test]
    fn new_word_ignores_client_id_and_defaults_scores() {
        let word: NewWord =
            serde_json::from_str(r#"{"id":1337,"vocabulary":"Test","translation":"Ein Test"}"#)
                .unwrap();
        assert_eq!(word, NewWord::new("Test", "Ein Test"));
    }

    #[test]
    fn patch_accepts_legacy_field_names() {
        let patch: WordPatch =
            serde_json::from_str(r#"{"ID":2,"Vocabulary":"x","Translation":"y","confidence":5}"#)
                .unwrap();
        assert_eq!(patch, WordPatch::new(2, "x", "y"));
    }
}
