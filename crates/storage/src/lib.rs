use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use campus_core::{parse_records, LogRecord};
use parking_lot::RwLock;
use thiserror::Error;

pub const DEFAULT_HISTORY_FILE: &str = "chat_history.txt";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed opening chat history at {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed writing chat history at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading chat history at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait ChatHistory {
    fn append(&self, record: &LogRecord) -> Result<(), HistoryError>;
    fn load(&self) -> Result<Vec<LogRecord>, HistoryError>;

    /// The last `limit` records, oldest first.
    fn recent(&self, limit: usize) -> Result<Vec<LogRecord>, HistoryError> {
        let mut records = self.load()?;
        let skip = records.len().saturating_sub(limit);
        Ok(records.split_off(skip))
    }
}

#[derive(Clone, Default)]
pub struct MemoryHistory {
    records: Arc<RwLock<Vec<LogRecord>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl ChatHistory for MemoryHistory {
    fn append(&self, record: &LogRecord) -> Result<(), HistoryError> {
        self.records.write().push(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vec<LogRecord>, HistoryError> {
        Ok(self.records())
    }
}

/// Append-only text log. The file is opened, written and closed on every
/// append; no handle outlives a call.
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChatHistory for FileHistory {
    fn append(&self, record: &LogRecord) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| HistoryError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{record}").map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn load(&self) -> Result<Vec<LogRecord>, HistoryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(parse_records(&contents))
    }
}

#[derive(Clone)]
pub enum History {
    Memory(MemoryHistory),
    File(FileHistory),
}

impl History {
    pub fn memory() -> Self {
        Self::Memory(MemoryHistory::new())
    }

    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(FileHistory::new(path))
    }

    pub fn describe(&self) -> String {
        match self {
            History::Memory(_) => "memory".to_string(),
            History::File(store) => store.path().display().to_string(),
        }
    }
}

impl ChatHistory for History {
    fn append(&self, record: &LogRecord) -> Result<(), HistoryError> {
        match self {
            History::Memory(store) => store.append(record),
            History::File(store) => store.append(record),
        }
    }

    fn load(&self) -> Result<Vec<LogRecord>, HistoryError> {
        match self {
            History::Memory(store) => store.load(),
            History::File(store) => store.load(),
        }
    }
}
