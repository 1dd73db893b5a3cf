//! Record collections ("items", "tasks").
//!
//! A record is an arbitrary JSON object; the store never looks inside it
//! except to apply a shallow merge.

pub mod collection;
pub mod repository;

use serde_json::{Map, Value};

pub use crate::storage::memory_map_store::RecordId;

pub type Record = Map<String, Value>;

/// Overwrite matching keys of `target` with the values from `patch` and add
/// new keys. Keys absent from `patch` are left untouched.
pub fn merge_shallow(target: &mut Record, patch: Record) {
    target.extend(patch);
}
