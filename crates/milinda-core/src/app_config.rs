use std::path::PathBuf;

use crate::TextEncoding;

/// Runtime settings shared by the analyzer and the quote store.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// SQLite file backing the quote store. Created on first connect.
    pub database_path: PathBuf,
    /// Default input for `milinda analyze` when no path is given.
    pub text_path: PathBuf,
    pub text_encoding: TextEncoding,
    /// Number of entries in the ranked word list.
    pub top_words: usize,
    pub db_acquire_timeout_secs: u64,
}
