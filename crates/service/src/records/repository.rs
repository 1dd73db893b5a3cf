use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{Record, RecordId};
use crate::errors::ServiceError;

/// Trait abstraction for a record collection.
/// The HTTP layer only talks to collections through this seam.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Store a new record; returns the allocated id with the stored body.
    async fn create(&self, record: Record) -> (RecordId, Record);
    async fn get(&self, id: RecordId) -> Result<Record, ServiceError>;
    async fn list(&self) -> BTreeMap<RecordId, Record>;
    /// Shallow-merge `patch` into the stored record and return the result.
    async fn merge(&self, id: RecordId, patch: Record) -> Result<Record, ServiceError>;
    async fn delete(&self, id: RecordId) -> Result<(), ServiceError>;
    async fn len(&self) -> usize;
}
