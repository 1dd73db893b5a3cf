use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::records::Record;

/// Body key carrying the new name.
pub const NAME_KEY: &str = "Name";

/// Process-wide name, shared by every request.
#[derive(Clone, Debug)]
pub struct NameField {
    inner: Arc<RwLock<String>>,
}

impl NameField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { inner: Arc::new(RwLock::new(initial.into())) }
    }

    pub async fn get(&self) -> String {
        self.inner.read().await.clone()
    }

    /// Replace the name; returns the previous value.
    pub async fn set(&self, name: String) -> String {
        let mut guard = self.inner.write().await;
        std::mem::replace(&mut *guard, name)
    }

    /// Take `Name` from a request body and store it.
    pub async fn apply_patch(&self, body: &Record) -> Result<String, ServiceError> {
        let name = match body.get(NAME_KEY) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ServiceError::InvalidField { field: NAME_KEY, expected: "a string" })
            }
            None => return Err(ServiceError::MissingField(NAME_KEY)),
        };
        let previous = self.set(name.clone()).await;
        debug!(%previous, current = %name, "name changed");
        Ok(name)
    }
}
