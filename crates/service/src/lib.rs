//! Service layer for the record store.
//! - Owns all process state (two record collections and the name field).
//! - Knows nothing about HTTP; handlers map [`errors::ServiceError`] to responses.

pub mod errors;
pub mod name_field;
pub mod records;
pub mod storage;
pub mod store;

pub use store::RecordStore;
