use dashmap::DashMap;
use gdpr_core::{Error, ObjectFetcher, ObjectWriter, Result};

/// In-memory object store
#[derive(Default)]
pub struct MemoryStore {
    /// Map from (bucket, key) -> object bytes
    objects: DashMap<(String, String), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, bucket: &str, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.objects
            .insert((bucket.to_string(), key.to_string()), bytes.into());
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectFetcher for MemoryStore {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

impl ObjectWriter for MemoryStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> Result<()> {
        self.objects
            .insert((bucket.to_string(), key.to_string()), bytes.to_vec());
        Ok(())
    }
}
