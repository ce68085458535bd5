//! Object store capabilities

use crate::Result;

/// Retrieves the raw bytes of an object
pub trait ObjectFetcher: Send + Sync {
    /// Fetch `key` from `bucket`, failing with `Error::NotFound` if it does not exist
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// Stores raw bytes as an object (used to re-upload redacted output)
pub trait ObjectWriter: Send + Sync {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<F> ObjectFetcher for F
where
    F: Fn(&str, &str) -> Result<Vec<u8>> + Send + Sync,
{
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self(bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_closure_as_fetcher() {
        let fetcher = |bucket: &str, key: &str| -> Result<Vec<u8>> {
            if bucket == "bucket" && key == "file.csv" {
                Ok(b"id\n1\n".to_vec())
            } else {
                Err(Error::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                })
            }
        };

        assert_eq!(fetcher.fetch("bucket", "file.csv").unwrap(), b"id\n1\n");
        let err = fetcher.fetch("bucket", "other.csv").unwrap_err();
        assert_eq!(err.to_string(), "Object not found: s3://bucket/other.csv");
    }
}
