//! Durable storage for the vocabulary list.

pub mod backup;
pub mod codec;

pub use backup::{backup_path_for, next_backup_path};
pub use codec::{LoadedWords, StoreFile, encode_words};
