use std::collections::BTreeMap;

use tracing::debug;

use super::{merge_shallow, repository::RecordRepository, Record, RecordId};
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory record collection backed by [`MemoryMapStore`].
#[derive(Clone)]
pub struct RecordCollection {
    kind: &'static str,
    store: MemoryMapStore<Record>,
}

impl RecordCollection {
    pub fn new(kind: &'static str) -> Self {
        Self { kind, store: MemoryMapStore::new() }
    }

    pub async fn create(&self, record: Record) -> (RecordId, Record) {
        let id = self.store.insert_next(record.clone()).await;
        debug!(collection = self.kind, id, keys = record.len(), "record created");
        (id, record)
    }

    pub async fn get(&self, id: RecordId) -> Result<Record, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(self.kind, id))
    }

    pub async fn list(&self) -> BTreeMap<RecordId, Record> {
        self.store.list().await
    }

    pub async fn merge(&self, id: RecordId, patch: Record) -> Result<Record, ServiceError> {
        let keys = patch.len();
        let merged = self
            .store
            .update(id, |stored| merge_shallow(stored, patch))
            .await
            .ok_or_else(|| ServiceError::not_found(self.kind, id))?;
        debug!(collection = self.kind, id, keys, "record merged");
        Ok(merged)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        if !self.store.remove(id).await {
            return Err(ServiceError::not_found(self.kind, id));
        }
        debug!(collection = self.kind, id, "record deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }
}

#[async_trait::async_trait]
impl RecordRepository for RecordCollection {
    async fn create(&self, record: Record) -> (RecordId, Record) {
        self.create(record).await
    }

    async fn get(&self, id: RecordId) -> Result<Record, ServiceError> {
        self.get(id).await
    }

    async fn list(&self) -> BTreeMap<RecordId, Record> {
        self.list().await
    }

    async fn merge(&self, id: RecordId, patch: Record) -> Result<Record, ServiceError> {
        self.merge(id, patch).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        self.delete(id).await
    }

    async fn len(&self) -> usize {
        self.len().await
    }
}
