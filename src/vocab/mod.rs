//! Core `VocabStore` type orchestrating the word list lifecycle and mutations.

pub mod lifecycle;
pub mod mutation;
mod query;
pub mod scoring;

pub use lifecycle::VocabStore;
pub use mutation::reindex;
pub use scoring::{apply_rescore, rescored_confidence, rescored_repeat_count};
