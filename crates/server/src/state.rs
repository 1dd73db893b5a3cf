use service::RecordStore;

/// Router state. Cheap to clone; every clone points at the same store.
#[derive(Clone)]
pub struct ServerState {
    pub store: RecordStore,
}

impl ServerState {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn in_memory(default_name: impl Into<String>) -> Self {
        Self::new(RecordStore::in_memory(default_name))
    }
}
