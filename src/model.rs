use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Total hotness per path, as reported by git (not normalized).
pub type HotnessMap = HashMap<String, u64>;

/// What part of the history to read. Every field is handed to git verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogScope {
    /// Pathspec to restrict the log to; empty means the repository root.
    pub path: String,
    pub since: Option<String>,
    pub until: Option<String>,
}

impl LogScope {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            since: None,
            until: None,
        }
    }

    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn with_until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotEntry {
    pub path: String,
    pub hotness: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub path_prefix: String,
    pub since: Option<String>,
    pub until: Option<String>,
    pub top: usize,
    pub entries: Vec<HotEntry>,
}
