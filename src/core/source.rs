//! Record source trait

use crate::core::error::TableError;
use crate::core::record::RecordSet;
use async_trait::async_trait;

/// Supplies the record set for a session
///
/// Called once when the table is first shown. Implementations decide where
/// the records come from; the view engine only ever sees the resulting
/// [`RecordSet`].
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch at most `limit` records, in source order
    async fn fetch(&self, limit: usize) -> Result<RecordSet, TableError>;
}
