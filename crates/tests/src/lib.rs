//! Shared fixtures for the cross-crate tests.

use std::path::PathBuf;

use campus_storage::DEFAULT_HISTORY_FILE;
use regex::Regex;
use tempfile::TempDir;

/// A scratch directory holding the history file path. Keep the `TempDir`
/// alive for as long as the file is used.
pub fn temp_history_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(DEFAULT_HISTORY_FILE);
    (dir, path)
}

/// Matches a record header line: `[YYYY-MM-DD HH:MM:SS] Speaker: text`.
pub fn record_header() -> Regex {
    Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] (You|Chatbot): ").expect("valid regex")
}
