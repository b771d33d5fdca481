//! Schema detection and migration for persisted vocabulary lists.
//!
//! Stores written by older releases hold [`WordV1`] records. Decoding walks an ordered
//! chain: the current schema first, then V1, upgrading V1 records on the way out.
//! A payload where only some records carry scores is decoded record by record so
//! the scores that exist survive the upgrade.
//! Blank content is a first run and decodes to [`DecodedWords::Empty`].

use serde::Deserialize;

use super::word::{Word, WordId, WordV1};
use crate::error::{Result, VocabError};

/// Record schema found in a persisted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V1,
    V2,
}

impl SchemaVersion {
    pub const CURRENT: Self = Self::V2;

    #[must_use]
    pub fn needs_migration(self) -> bool {
        self != Self::CURRENT
    }
}

/// Tagged result of decoding a persisted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedWords {
    Empty,
    V1(Vec<WordV1>),
    /// Old-shape records mixed with scored ones. Missing scores are zero.
    Mixed(Vec<Word>),
    V2(Vec<Word>),
}

/// Record with optional scores, used to salvage partially scored payloads.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialWord {
    #[serde(alias = "ID", alias = "Id")]
    id: WordId,
    #[serde(alias = "Term", alias = "vocabulary", alias = "Vocabulary")]
    term: String,
    #[serde(alias = "Translation")]
    translation: String,
    #[serde(default, alias = "Confidence")]
    confidence: Option<i64>,
    #[serde(default, alias = "RepeatCount", alias = "repeat", alias = "Repeat")]
    repeat_count: Option<u64>,
}

impl PartialWord {
    fn has_scores(&self) -> bool {
        self.confidence.is_some() || self.repeat_count.is_some()
    }

    fn into_word(self) -> Word {
        Word {
            id: self.id,
            term: self.term,
            translation: self.translation,
            confidence: self.confidence.unwrap_or_default(),
            repeat_count: self.repeat_count.unwrap_or_default(),
        }
    }

    fn into_v1(self) -> WordV1 {
        WordV1 {
            id: self.id,
            term: self.term,
            translation: self.translation,
        }
    }
}

impl DecodedWords {
    /// Schema of the payload, `None` for blank content.
    #[must_use]
    pub fn schema(&self) -> Option<SchemaVersion> {
        match self {
            Self::Empty => None,
            Self::V1(_) | Self::Mixed(_) => Some(SchemaVersion::V1),
            Self::V2(_) => Some(SchemaVersion::V2),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::V1(words) => words.len(),
            Self::Mixed(words) | Self::V2(words) => words.len(),
        }
    }

    /// True when some records were upgraded next to records that kept their scores.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed(_))
    }

    /// Converts to the current record shape, migrating if needed.
    #[must_use]
    pub fn into_current(self) -> Vec<Word> {
        match self {
            Self::Empty => Vec::new(),
            Self::V1(words) => migrate_v1(words),
            Self::Mixed(words) | Self::V2(words) => words,
        }
    }
}

/// Upgrades V1 records with zeroed scores. Ids are preserved as-is.
#[must_use]
pub fn migrate_v1(words: Vec<WordV1>) -> Vec<Word> {
    words.into_iter().map(Word::from).collect()
}

/// Decodes a persisted payload, trying the current schema before V1.
///
/// A V1-shaped payload in which any record carries a score decodes as
/// [`DecodedWords::Mixed`]. Returns [`VocabError::Corrupt`] when neither schema
/// matches.
pub fn decode_words(bytes: &[u8]) -> Result<DecodedWords> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(DecodedWords::Empty);
    }

    let v2_err = match serde_json::from_slice::<Vec<Word>>(bytes) {
        Ok(words) => return Ok(DecodedWords::V2(words)),
        Err(err) => err,
    };
    let words = serde_json::from_slice::<Vec<PartialWord>>(bytes).map_err(|v1_err| {
        VocabError::Corrupt {
            reason: format!("not a v2 word list ({v2_err}) nor a v1 word list ({v1_err})"),
        }
    })?;
    if words.iter().any(PartialWord::has_scores) {
        Ok(DecodedWords::Mixed(
            words.into_iter().map(PartialWord::into_word).collect(),
        ))
    } else {
        Ok(DecodedWords::V1(
            words.into_iter().map(PartialWord::into_v1).collect(),
        ))
    }
}
