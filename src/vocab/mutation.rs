//! Word mutation routines for `VocabStore`.
//!
//! Every mutation follows the same path under the write lock: validate against the
//! current list, apply to a staged copy, re-derive dense ids, persist the staged copy,
//! and only then swap it in. A failed validation or a failed write leaves the
//! in-memory list exactly as it was.

use log::info;
use parking_lot::RwLockWriteGuard;

use super::lifecycle::VocabStore;
use super::scoring::apply_rescore;
use crate::error::{Result, VocabError};
use crate::types::{
    NewWord, RescoreEntry, RescoreRejection, RescoreReport, Word, WordId, WordPatch,
};

/// Rewrites every id to its position. Returns how many ids changed.
pub fn reindex(words: &mut [Word]) -> usize {
    let mut changed = 0;
    for (idx, word) in words.iter_mut().enumerate() {
        if word.id != idx {
            word.id = idx;
            changed += 1;
        }
    }
    changed
}

fn validate_text(term: &str, translation: &str) -> Result<()> {
    if term.trim().is_empty() {
        return Err(VocabError::Validation {
            reason: "term must not be empty",
        });
    }
    if translation.trim().is_empty() {
        return Err(VocabError::Validation {
            reason: "translation must not be empty",
        });
    }
    Ok(())
}

fn ensure_ids_match(path_id: WordId, body_id: WordId) -> Result<()> {
    if path_id != body_id {
        return Err(VocabError::IdMismatch { path_id, body_id });
    }
    Ok(())
}

fn ensure_in_range(id: WordId, len: usize) -> Result<()> {
    if id >= len {
        return Err(VocabError::OutOfRange { id, len });
    }
    Ok(())
}

impl VocabStore {
    /// Appends `word` with `id = len` and returns the updated list.
    pub fn add(&self, word: NewWord) -> Result<Vec<Word>> {
        validate_text(&word.term, &word.translation)?;

        let mut guard = self.words.write();
        let id = guard.len();
        let mut staged = guard.clone();
        staged.push(word.into_word(id));
        let words = self.commit(&mut guard, staged)?;
        info!("word_add id={id}");
        Ok(words)
    }

    /// Replaces the term and translation of the word at `path_id`. Scores are untouched.
    pub fn update(&self, path_id: WordId, patch: &WordPatch) -> Result<Vec<Word>> {
        ensure_ids_match(path_id, patch.id)?;

        let mut guard = self.words.write();
        ensure_in_range(path_id, guard.len())?;
        validate_text(&patch.term, &patch.translation)?;

        let mut staged = guard.clone();
        let word = &mut staged[path_id];
        word.term.clone_from(&patch.term);
        word.translation.clone_from(&patch.translation);
        let words = self.commit(&mut guard, staged)?;
        info!("word_update id={path_id}");
        Ok(words)
    }

    /// Removes the word at `path_id` if it still equals `expected`, shifting later ids down.
    pub fn remove(&self, path_id: WordId, expected: &Word) -> Result<Vec<Word>> {
        ensure_ids_match(path_id, expected.id)?;

        let mut guard = self.words.write();
        ensure_in_range(path_id, guard.len())?;
        if guard[path_id] != *expected {
            tracing::debug!(
                target: "vocab::store",
                id = path_id,
                "remove rejected; stored word differs from the expected one"
            );
            return Err(VocabError::StaleRecord { id: path_id });
        }

        let mut staged = guard.clone();
        staged.remove(path_id);
        let words = self.commit(&mut guard, staged)?;
        info!("word_remove id={path_id}");
        Ok(words)
    }

    /// Applies a batch of review scores.
    ///
    /// Entries naming an unknown id are rejected individually; the rest are applied and
    /// persisted together. Nothing is written when no entry applied.
    pub fn rescore(&self, entries: &[RescoreEntry]) -> Result<RescoreReport> {
        let mut guard = self.words.write();
        let mut staged = guard.clone();
        let mut applied = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();

        for entry in entries {
            match staged.iter_mut().find(|word| word.id == entry.id) {
                Some(word) => {
                    apply_rescore(word, entry);
                    applied.push(entry.id);
                }
                None => {
                    tracing::warn!(
                        target: "vocab::store",
                        id = entry.id,
                        "rescore entry names an unknown word"
                    );
                    rejected.push(RescoreRejection {
                        id: entry.id,
                        reason: VocabError::NotFound { id: entry.id }.to_string(),
                    });
                }
            }
        }

        let words = if applied.is_empty() {
            guard.clone()
        } else {
            self.commit(&mut guard, staged)?
        };
        let report = RescoreReport {
            words,
            applied,
            rejected,
        };
        info!(
            "word_rescore applied={} rejected={} complete={}",
            report.applied.len(),
            report.rejected.len(),
            report.is_complete()
        );
        Ok(report)
    }

    fn commit(
        &self,
        guard: &mut RwLockWriteGuard<'_, Vec<Word>>,
        mut staged: Vec<Word>,
    ) -> Result<Vec<Word>> {
        let repaired = reindex(&mut staged);
        tracing::debug!(target: "vocab::store", repaired, "fixed the indexing");
        self.persist(&staged)?;
        **guard = staged;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_words() -> VocabStore {
        VocabStore::from_words(vec![
            Word::new(0, "haus", "house"),
            Word::new(1, "baum", "tree"),
            Word::new(2, "hund", "dog"),
        ])
    }

    #[test]
    fn add_to_empty_store() {
        let store = VocabStore::in_memory();
        let words = store.add(NewWord::new("haus", "house")).unwrap();
        assert_eq!(words, vec![Word::new(0, "haus", "house")]);
    }

    #[test]
    fn add_appends_with_next_id_and_keeps_scores() {
        let store = three_words();
        let words = store
            .add(NewWord::new("katze", "cat").with_score(5, 2))
            .unwrap();
        assert_eq!(words.len(), 4);
        assert_eq!(words[3].id, 3);
        assert_eq!(words[3].confidence, 5);
        assert_eq!(words[3].repeat_count, 2);
    }

    #[test]
    fn add_rejects_blank_text() {
        let store = VocabStore::in_memory();
        let err = store.add(NewWord::new("  ", "house")).expect_err("blank term");
        assert!(matches!(err, VocabError::Validation { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_middle_shifts_later_ids() {
        let store = three_words();
        let expected = store.get(1).unwrap();
        let words = store.remove(1, &expected).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], Word::new(0, "haus", "house"));
        assert_eq!(words[1], Word::new(1, "hund", "dog"));
    }

    #[test]
    fn remove_with_stale_expectation_changes_nothing() {
        let store = three_words();
        let before = store.list();
        let mut stale = store.get(1).unwrap();
        stale.confidence = 3;
        let err = store.remove(1, &stale).expect_err("stale record");
        assert!(matches!(err, VocabError::StaleRecord { id: 1 }));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn remove_rejects_mismatch_and_out_of_range() {
        let store = three_words();
        let word = store.get(2).unwrap();
        assert!(matches!(
            store.remove(1, &word),
            Err(VocabError::IdMismatch {
                path_id: 1,
                body_id: 2
            })
        ));
        let ghost = Word::new(3, "x", "y");
        assert!(matches!(
            store.remove(3, &ghost),
            Err(VocabError::OutOfRange { id: 3, len: 3 })
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_with_mismatched_body_id_is_rejected() {
        let store = three_words();
        let before = store.list();
        let err = store
            .update(1, &WordPatch::new(2, "x", "y"))
            .expect_err("id mismatch");
        assert!(matches!(err, VocabError::IdMismatch { .. }));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn update_changes_only_text_of_target() {
        let store = VocabStore::from_words(vec![
            Word::new(0, "haus", "house"),
            Word {
                confidence: 12,
                repeat_count: 4,
                ..Word::new(1, "baum", "tree")
            },
        ]);
        let words = store.update(1, &WordPatch::new(1, "x", "y")).unwrap();
        assert_eq!(words[0], Word::new(0, "haus", "house"));
        assert_eq!(
            words[1],
            Word {
                id: 1,
                term: "x".into(),
                translation: "y".into(),
                confidence: 12,
                repeat_count: 4,
            }
        );
    }

    #[test]
    fn update_out_of_range_is_rejected() {
        let store = three_words();
        assert!(matches!(
            store.update(3, &WordPatch::new(3, "x", "y")),
            Err(VocabError::OutOfRange { id: 3, len: 3 })
        ));
    }

    #[test]
    fn rescore_applies_bounded_decay() {
        let mut seeded: Vec<Word> = (0..6).map(|i| Word::new(i, "t", "u")).collect();
        seeded[5].confidence = 40;
        let store = VocabStore::from_words(seeded);

        let report = store
            .rescore(&[RescoreEntry {
                id: 5,
                confidence: 25,
                repeat_count: 1,
            }])
            .unwrap();
        assert_eq!(report.words[5].confidence, 40);
        assert_eq!(report.words[5].repeat_count, 1);

        let report = store
            .rescore(&[RescoreEntry {
                id: 5,
                confidence: 33,
                repeat_count: 0,
            }])
            .unwrap();
        assert_eq!(report.words[5].confidence, 33);
        assert_eq!(report.words[5].repeat_count, 1);
    }

    #[test]
    fn rescore_rejects_unknown_entries_and_continues() {
        let store = three_words();
        let report = store
            .rescore(&[
                RescoreEntry {
                    id: 9,
                    confidence: 1,
                    repeat_count: 1,
                },
                RescoreEntry {
                    id: 0,
                    confidence: 7,
                    repeat_count: 2,
                },
            ])
            .unwrap();
        assert_eq!(report.applied, vec![0]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].id, 9);
        assert!(!report.is_complete());
        assert_eq!(store.get(0).unwrap().confidence, 7);
    }

    #[test]
    fn reindex_counts_changes() {
        let mut words = vec![Word::new(0, "a", "b"), Word::new(5, "c", "d")];
        assert_eq!(reindex(&mut words), 1);
        assert_eq!(reindex(&mut words), 0);
    }
}
