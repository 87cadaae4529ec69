use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::RecordRepository;
use crate::domain::{Department, DomainError, Employee, Record, RecordId};

pub type EmployeeStore = InMemoryRecordRepository<Employee>;
pub type DepartmentStore = InMemoryRecordRepository<Department>;

/// Volatile record store guarded by a single reader/writer lock.
///
/// Mutations take the write lock, lookups take the read lock. Nothing is
/// awaited while the guard is held, so every critical section runs to
/// completion once the lock is acquired.
pub struct InMemoryRecordRepository<R: Record> {
    records: RwLock<HashMap<RecordId, R>>,
}

impl<R: Record> InMemoryRecordRepository<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Largest stored ID plus one, or 1 when no positive ID is stored.
    ///
    /// Scanning keeps assignment consistent with the map's actual contents
    /// instead of a separate counter. Once `RecordId::MAX` is taken the
    /// lowest free positive ID is used, so an auto-assigned create never
    /// lands on an occupied key.
    fn next_id(records: &HashMap<RecordId, R>) -> RecordId {
        let max_id = records.keys().copied().fold(0, RecordId::max);
        max_id
            .checked_add(1)
            .unwrap_or_else(|| Self::lowest_free_id(records))
    }

    fn lowest_free_id(records: &HashMap<RecordId, R>) -> RecordId {
        (1..RecordId::MAX)
            .find(|id| !records.contains_key(id))
            .unwrap_or(RecordId::MAX)
    }
}

impl<R: Record> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    async fn create(&self, mut record: R) -> R {
        let mut records = self.records.write().await;
        if record.is_unassigned() {
            record.set_id(Self::next_id(&records));
        }
        if records.insert(record.id(), record.clone()).is_some() {
            debug!("Overwrote {} {} on create", R::KIND, record.id());
        }
        record
    }

    async fn retrieve(&self, id: RecordId) -> Result<R, DomainError> {
        let records = self.records.read().await;
        records
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(R::KIND, id))
    }

    async fn retrieve_all(&self) -> Vec<R> {
        let records = self.records.read().await;
        records.values().cloned().collect()
    }

    async fn update(&self, record: R) -> Result<R, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(DomainError::not_found(R::KIND, record.id())),
        }
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(R::KIND, id))
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}
