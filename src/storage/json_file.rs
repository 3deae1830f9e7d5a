//! RecordSource reading a users JSON document from disk

use crate::core::error::TableError;
use crate::core::record::{Record, RecordSet};
use crate::core::source::RecordSource;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted payload shapes: a bare array, or the users API envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<Record>),
    Envelope { users: Vec<Record> },
}

impl Payload {
    fn into_records(self) -> Vec<Record> {
        match self {
            Payload::Bare(records) | Payload::Envelope { users: records } => records,
        }
    }
}

/// Record source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRecordSource {
    path: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a users payload held in memory
    pub fn decode(content: &str) -> Result<Vec<Record>, TableError> {
        let payload: Payload = serde_json::from_str(content)?;
        Ok(payload.into_records())
    }
}

#[async_trait]
impl RecordSource for JsonFileRecordSource {
    async fn fetch(&self, limit: usize) -> Result<RecordSet, TableError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TableError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut records = Self::decode(&content)?;
        records.truncate(limit);

        tracing::info!(
            path = %self.path.display(),
            count = records.len(),
            "loaded records from file"
        );
        Ok(RecordSet::new(records))
    }
}
