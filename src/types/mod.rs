//! Public types exposed by the `vocab-store` crate.

pub mod options;
pub mod schema;
pub mod word;

pub use options::{LoadPolicy, StoreOptions, StoreOptionsBuilder};
pub use schema::{DecodedWords, SchemaVersion, decode_words, migrate_v1};
pub use word::{
    NewWord, RescoreEntry, RescoreRejection, RescoreReport, Word, WordId, WordPatch, WordV1,
};
