//! Shared constants for the on-disk format and scoring rules.

/// File name used when no explicit store path is configured.
pub const DEFAULT_STORE_FILE: &str = "vocabulary.json";

/// Indentation used for the pretty-printed store file.
pub const STORE_JSON_INDENT: &[u8] = b"\t";

/// First suffix tried when rotating the store file to `<stem>_<n>.<ext>`.
pub const FIRST_BACKUP_INDEX: u32 = 1;

/// Largest confidence drop a single rescore may apply.
pub const MAX_CONFIDENCE_DROP: i64 = 10;

/// Number of words echoed to the log after loading a store.
pub const LOAD_PREVIEW_WORDS: usize = 10;

/// Log file the server appends to next to stdout.
pub const DEFAULT_LOG_FILE: &str = "api.log";
