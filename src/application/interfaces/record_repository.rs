use async_trait::async_trait;

use crate::domain::{DomainError, Record, RecordId};

/// Keyed storage for one record kind.
///
/// `create` never fails: a record carrying the unassigned ID receives the
/// next identifier, any other ID is stored as given and replaces whatever
/// was stored under it. The remaining mutations require the ID to exist.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    async fn create(&self, record: R) -> R;

    async fn retrieve(&self, id: RecordId) -> Result<R, DomainError>;

    async fn retrieve_all(&self) -> Vec<R>;

    async fn update(&self, record: R) -> Result<R, DomainError>;

    async fn delete(&self, id: RecordId) -> Result<(), DomainError>;

    async fn count(&self) -> usize;
}
