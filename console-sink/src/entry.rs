//!
//! [`LogEntry`] as delivered by the upstream logging pipeline.
//!

use crate::level::Level;
use crate::result::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured metadata attached to an entry.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A single log record. The `level` field keeps the raw severity name
/// produced upstream; it is validated when the entry is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: u64,
    pub logger: String,
    pub level: String,
    pub message: String,
    #[serde(default, alias = "meta")]
    pub metadata: Metadata,
}

impl LogEntry {
    pub fn new(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: 0,
            logger: logger.into(),
            level: level.as_str().to_string(),
            message: message.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Parses the raw level, failing with
    /// [`Error::InvalidLevel`](crate::error::Error::InvalidLevel)
    /// when it is not one of the five known names.
    pub fn severity(&self) -> Result<Level> {
        self.level.parse()
    }
}
