use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

/// Integer id handed out by [`MemoryMapStore::insert_next`]. Starts at 1.
pub type RecordId = u64;

#[derive(Debug)]
struct Slots<V> {
    entries: BTreeMap<RecordId, V>,
    /// Highest id ever allocated; never decreases, so removed ids are not reused.
    last_id: RecordId,
}

/// Generic in-memory map store with id allocation.
///
/// Every operation takes the lock once, so an allocate-and-insert or a
/// read-modify-write is never interleaved with another request.
#[derive(Clone)]
pub struct MemoryMapStore<V> {
    inner: Arc<RwLock<Slots<V>>>,
}

impl<V> Default for MemoryMapStore<V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Slots { entries: BTreeMap::new(), last_id: 0 })),
        }
    }
}

impl<V> MemoryMapStore<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries ordered by id.
    pub async fn list(&self) -> BTreeMap<RecordId, V> {
        self.inner.read().await.entries.clone()
    }

    pub async fn get(&self, id: RecordId) -> Option<V> {
        self.inner.read().await.entries.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }

    /// Allocate the next id and store `value` under it.
    pub async fn insert_next(&self, value: V) -> RecordId {
        let mut slots = self.inner.write().await;
        slots.last_id += 1;
        let id = slots.last_id;
        slots.entries.insert(id, value);
        id
    }

    /// Remove an entry; returns whether it existed.
    pub async fn remove(&self, id: RecordId) -> bool {
        self.inner.write().await.entries.remove(&id).is_some()
    }

    /// Mutate an entry in place and return the new value, or `None` if absent.
    pub async fn update<F>(&self, id: RecordId, f: F) -> Option<V>
    where
        F: FnOnce(&mut V),
    {
        let mut slots = self.inner.write().await;
        let entry = slots.entries.get_mut(&id)?;
        f(entry);
        Some(entry.clone())
    }
}
