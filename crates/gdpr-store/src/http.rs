//! Unsigned HTTP access to S3-compatible endpoints (path-style addressing)

use std::time::Duration;

use gdpr_core::{Error, ObjectFetcher, ObjectWriter, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

pub struct HttpStore {
    endpoint: Url,
    client: Client,
}

impl HttpStore {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Validation(format!("Invalid HTTP endpoint '{}': {}", endpoint, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Validation(format!(
                "Invalid HTTP endpoint '{}': not a base URL",
                endpoint
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("gdpr-obfuscator/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            client,
        })
    }

    /// Path-style object URL; bucket and key segments are percent-encoded
    fn object_url(&self, bucket: &str, key: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Validation(format!("Invalid HTTP endpoint '{}'", self.endpoint)))?
            .pop_if_empty()
            .push(bucket)
            .extend(key.split('/'));
        Ok(url)
    }
}

impl ObjectFetcher for HttpStore {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(bucket, key)?;
        tracing::debug!(%url, "fetching object");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| Error::Fetch(format!("Failed to fetch {}: {}", url, e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            status if !status.is_success() => Err(Error::Fetch(format!(
                "HTTP error {}: {}",
                status.as_u16(),
                url
            ))),
            _ => {
                let body = response
                    .bytes()
                    .map_err(|e| Error::Fetch(format!("Failed to read response: {}", e)))?;
                Ok(body.to_vec())
            }
        }
    }
}

impl ObjectWriter for HttpStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> Result<()> {
        let url = self.object_url(bucket, key)?;
        tracing::debug!(%url, size = bytes.len(), "uploading object");

        let response = self
            .client
            .put(url.clone())
            .body(bytes.to_vec())
            .send()
            .map_err(|e| Error::Fetch(format!("Failed to upload {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "HTTP error {}: {}",
                response.status().as_u16(),
                url
            )));
        }

        Ok(())
    }
}
