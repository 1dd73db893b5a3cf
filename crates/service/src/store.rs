use std::sync::Arc;

use crate::name_field::NameField;
use crate::records::{collection::RecordCollection, repository::RecordRepository};

pub const ITEMS: &str = "items";
pub const TASKS: &str = "tasks";

/// Owner of all process state: both collections and the name field.
/// Cloning hands out another reference to the same state.
#[derive(Clone)]
pub struct RecordStore {
    pub items: Arc<dyn RecordRepository>,
    pub tasks: Arc<dyn RecordRepository>,
    pub name: NameField,
}

impl RecordStore {
    pub fn in_memory(default_name: impl Into<String>) -> Self {
        Self {
            items: Arc::new(RecordCollection::new(ITEMS)),
            tasks: Arc::new(RecordCollection::new(TASKS)),
            name: NameField::new(default_name),
        }
    }
}
