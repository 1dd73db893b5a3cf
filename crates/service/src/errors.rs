use thiserror::Error;

use crate::storage::memory_map_store::RecordId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{collection} record {id} not found")]
    NotFound { collection: &'static str, id: RecordId },
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    InvalidField { field: &'static str, expected: &'static str },
}

impl ServiceError {
    pub fn not_found(collection: &'static str, id: RecordId) -> Self {
        Self::NotFound { collection, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
