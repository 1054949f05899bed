//! src/storage/memory.rs
use crate::storage::{FetchError, ObjectStore};
use async_trait::async_trait;
use std::collections::HashMap;

/// Object store backed by a plain map, for tests and local runs with no
/// bucket in reach. A missing key reports `FetchError::NotFound`, the same
/// shape a real store produces.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    objects: HashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, key: &str, bytes: &[u8]) -> Self {
        self.objects.insert(key.to_string(), bytes.to_vec());
        self
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, FetchError> {
        self.objects
            .get(key)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                key: key.to_string(),
            })
    }
}
