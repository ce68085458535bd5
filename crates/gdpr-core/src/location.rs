//! S3 location parsing

use std::fmt;

use crate::{Error, Result};

const S3_SCHEME: &str = "s3://";

/// A bucket/key pair resolved from an `s3://bucket/key` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub key: String,
}

impl S3Location {
    /// Parse an `s3://bucket/key` URL, splitting on the first `/` after the bucket
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url.strip_prefix(S3_SCHEME).ok_or_else(|| {
            Error::Validation("Invalid S3 URL: Must start with 's3://'".to_string())
        })?;

        match rest.split_once('/') {
            Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => Ok(Self {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            _ => Err(Error::Validation(
                "Invalid S3 URL: Must be in the form s3://bucket/key".to_string(),
            )),
        }
    }
}

impl fmt::Display for S3Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", S3_SCHEME, self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_url() {
        let location = S3Location::parse("s3://my_ingestion_bucket/new_data/file1.csv").unwrap();
        assert_eq!(location.bucket, "my_ingestion_bucket");
        assert_eq!(location.key, "new_data/file1.csv");
    }

    #[test]
    fn test_missing_scheme() {
        let err = S3Location::parse("invalid_url").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Invalid S3 URL"));
        assert!(err.to_string().contains("s3://"));
    }

    #[test]
    fn test_missing_key() {
        for url in ["s3://bucket", "s3://bucket/", "s3:///key.csv", "s3://"] {
            let err = S3Location::parse(url).unwrap_err();
            assert!(
                err.to_string()
                    .contains("Must be in the form s3://bucket/key"),
                "unexpected error for {url}: {err}"
            );
        }
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(S3Location::parse("S3://bucket/file.csv").is_err());
        assert!(S3Location::parse("http://bucket/file.csv").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let url = "s3://bucket/a/b/c.parquet";
        assert_eq!(S3Location::parse(url).unwrap().to_string(), url);
    }
}
