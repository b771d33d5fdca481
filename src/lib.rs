#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: internal helpers are self-describing; public APIs still carry docs.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Store handles return owned snapshots; `len` without `is_empty` is fine on report types.
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::return_self_not_must_use)]

//! Personal vocabulary store.
//!
//! A [`VocabStore`] holds an ordered list of [`Word`]s whose ids always equal their
//! position. The list is persisted as a single pretty-printed JSON file that is
//! rewritten after every successful mutation; older first-generation files are
//! migrated on open. Review scores follow a bounded-decay rule (see
//! [`vocab::scoring`]).
//!
//! ```no_run
//! use vocab_store::{NewWord, VocabStore};
//!
//! let store = VocabStore::open_path("vocabulary.json")?;
//! let words = store.add(NewWord::new("haus", "house"))?;
//! assert_eq!(words.last().map(|w| w.id), Some(store.len() - 1));
//! # Ok::<(), vocab_store::VocabError>(())
//! ```
//!
//! The `server` feature adds an HTTP adapter in [`server`].

/// The vocab-store crate version (matches `Cargo.toml`).
pub const VOCAB_STORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod error;
pub mod io;
pub mod types;
pub mod vocab;

#[cfg(feature = "server")]
pub mod server;

pub use constants::*;
pub use error::{ErrorKind, Result, VocabError};
pub use io::{LoadedWords, StoreFile, backup_path_for, encode_words, next_backup_path};
pub use types::{
    DecodedWords, LoadPolicy, NewWord, RescoreEntry, RescoreRejection, RescoreReport,
    SchemaVersion, StoreOptions, StoreOptionsBuilder, Word, WordId, WordPatch, WordV1,
    decode_words, migrate_v1,
};
pub use vocab::{
    VocabStore, apply_rescore, reindex, rescored_confidence, rescored_repeat_count,
};
