use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::RecordRepository;
use crate::domain::{DomainError, Record, RecordId};

/// CRUD operations over a single record kind.
pub struct ManageRecordsUseCase<R: Record> {
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> Clone for ManageRecordsUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Record> ManageRecordsUseCase<R> {
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, record: R) -> R {
        let requested = record.id();
        let created = self.repository.create(record).await;

        if created.id() == requested {
            info!("Stored {} {}", R::KIND, created.id());
        } else {
            info!("Created {} {}", R::KIND, created.id());
        }

        created
    }

    pub async fn get(&self, id: RecordId) -> Result<R, DomainError> {
        debug!("Retrieving {} {}", R::KIND, id);
        self.repository.retrieve(id).await.inspect_err(log_miss)
    }

    pub async fn list(&self) -> Vec<R> {
        let records = self.repository.retrieve_all().await;
        debug!("Listed {} {} records", records.len(), R::KIND);
        records
    }

    pub async fn update(&self, record: R) -> Result<R, DomainError> {
        let updated = self.repository.update(record).await.inspect_err(log_miss)?;
        info!("Updated {} {}", R::KIND, updated.id());
        Ok(updated)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        self.repository.delete(id).await.inspect_err(log_miss)?;
        info!("Deleted {} {}", R::KIND, id);
        Ok(())
    }
}

fn log_miss(err: &DomainError) {
    warn!("{}", err);
}
