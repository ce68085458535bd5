//! Filesystem-backed object store

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use gdpr_core::{Error, ObjectFetcher, ObjectWriter, Result};

/// Object store rooted at a directory: `{root}/{bucket}/{key}`
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file path for an object, rejecting keys that escape the bucket
    fn path_for(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        let bucket_path = Path::new(bucket);
        let key_path = Path::new(key);
        let is_plain = |path: &Path| path.components().all(|c| matches!(c, Component::Normal(_)));

        if bucket.contains('/') || !is_plain(bucket_path) || !is_plain(key_path) {
            return Err(Error::Validation(format!(
                "Invalid object path: {}/{}",
                bucket, key
            )));
        }

        Ok(self.root.join(bucket_path).join(key_path))
    }
}

impl ObjectFetcher for LocalStore {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.path_for(bucket, key)?;
        tracing::debug!(path = %path.display(), "reading object");

        std::fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => Error::Fetch(format!("Failed to read {}: {}", path.display(), e)),
        })
    }
}

impl ObjectWriter for LocalStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(bucket, key)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "wrote object");
        Ok(())
    }
}
