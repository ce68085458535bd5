use serde::{Deserialize, Serialize};

use crate::{Error, Result, S3Location};

/// A single obfuscation job: where the file lives and which fields to redact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObfuscationRequest {
    #[serde(rename = "file_to_obfuscate", alias = "location")]
    pub location: String,

    #[serde(rename = "pii_fields", alias = "fields")]
    pub fields: Vec<String>,
}

impl ObfuscationRequest {
    pub fn new(location: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            location: location.into(),
            fields,
        }
    }

    /// Parse a request from its JSON form, e.g.
    /// `{"file_to_obfuscate": "s3://bucket/key.csv", "pii_fields": ["name"]}`
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::InvalidRequest(e.to_string()))
    }

    pub fn resolve(&self) -> Result<S3Location> {
        S3Location::parse(&self.location)
    }
}
