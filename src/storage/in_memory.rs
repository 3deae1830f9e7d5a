//! In-memory implementation of RecordSource for testing and development

use crate::core::error::TableError;
use crate::core::record::{Record, RecordSet};
use crate::core::source::RecordSource;
use async_trait::async_trait;

/// In-memory record source
///
/// Serves a fixed list of records, as if fetched from the users API.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: Vec<Record>,
}

impl InMemoryRecordSource {
    /// Create a source serving `records` in the given order
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch(&self, limit: usize) -> Result<RecordSet, TableError> {
        let records: Vec<Record> = self.records.iter().take(limit).cloned().collect();
        tracing::info!(count = records.len(), "loaded records from memory");
        Ok(RecordSet::new(records))
    }
}
