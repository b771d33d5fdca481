//! Spaced-repetition score updates.
//!
//! Confidence follows the reviewer's submission unless that would drop it by more than
//! [`MAX_CONFIDENCE_DROP`] in one step. Repeat counts only grow.

use crate::constants::MAX_CONFIDENCE_DROP;
use crate::types::{RescoreEntry, Word};

#[must_use]
pub fn rescored_confidence(current: i64, submitted: i64) -> i64 {
    if submitted >= current.saturating_sub(MAX_CONFIDENCE_DROP) {
        submitted
    } else {
        current
    }
}

#[must_use]
pub fn rescored_repeat_count(current: u64, submitted: u64) -> u64 {
    current.max(submitted)
}

pub fn apply_rescore(word: &mut Word, entry: &RescoreEntry) {
    word.confidence = rescored_confidence(word.confidence, entry.confidence);
    word.repeat_count = rescored_repeat_count(word.repeat_count, entry.repeat_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_beyond_bound_is_ignored() {
        assert_eq!(rescored_confidence(40, 25), 40);
    }

    #[test]
    fn drop_within_bound_is_applied() {
        assert_eq!(rescored_confidence(40, 33), 33);
        assert_eq!(rescored_confidence(40, 30), 30);
        assert_eq!(rescored_confidence(40, 29), 40);
    }

    #[test]
    fn increases_are_always_applied() {
        assert_eq!(rescored_confidence(-5, 100), 100);
        assert_eq!(rescored_confidence(0, 1), 1);
    }

    #[test]
    fn negative_scores_use_the_same_bound() {
        assert_eq!(rescored_confidence(-3, -13), -13);
        assert_eq!(rescored_confidence(-3, -14), -3);
    }

    #[test]
    fn bound_saturates_at_the_minimum() {
        assert_eq!(rescored_confidence(i64::MIN + 2, i64::MIN), i64::MIN);
    }

    #[test]
    fn repeat_count_never_decreases() {
        assert_eq!(rescored_repeat_count(4, 2), 4);
        assert_eq!(rescored_repeat_count(4, 9), 9);
    }

    #[test]
    fn apply_touches_only_scores() {
        let mut word = Word::new(5, "haus", "house");
        word.confidence = 40;
        word.repeat_count = 3;
        apply_rescore(
            &mut word,
            &RescoreEntry {
                id: 5,
                confidence: 33,
                repeat_count: 1,
            },
        );
        assert_eq!(word.confidence, 33);
        assert_eq!(word.repeat_count, 3);
        assert_eq!(word.term, "haus");
        assert_eq!(word.id, 5);
    }
}
