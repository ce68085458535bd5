//! Obfuscation dispatcher
//!
//! Resolves the request's S3 location, fetches the object through the
//! injected [`ObjectFetcher`], picks a transform from the key suffix and
//! returns the redacted bytes.

use gdpr_core::{FileFormat, ObfuscationRequest, ObjectFetcher, Result};
use gdpr_transform::RedactionInfo;

/// Result of one obfuscation run
#[derive(Debug, Clone)]
pub struct Obfuscated {
    pub bytes: Vec<u8>,
    pub format: FileFormat,
    pub redactions: Vec<RedactionInfo>,
}

pub struct Obfuscator<'a> {
    fetcher: &'a dyn ObjectFetcher,
}

impl<'a> Obfuscator<'a> {
    pub fn new(fetcher: &'a dyn ObjectFetcher) -> Self {
        Self { fetcher }
    }

    /// Redact the requested fields and return the new file contents
    pub fn obfuscate(&self, request: &ObfuscationRequest) -> Result<Vec<u8>> {
        self.obfuscate_with_report(request).map(|out| out.bytes)
    }

    /// Same as [`Obfuscator::obfuscate`] for a request in its JSON form
    pub fn obfuscate_json_request(&self, input: &str) -> Result<Vec<u8>> {
        let request = ObfuscationRequest::from_json(input)?;
        self.obfuscate(&request)
    }

    pub fn obfuscate_with_report(&self, request: &ObfuscationRequest) -> Result<Obfuscated> {
        // 1. Resolve location (before any fetch)
        let location = request.resolve()?;
        tracing::info!(%location, fields = ?request.fields, "obfuscating object");

        // 2. Fetch
        let data = self.fetcher.fetch(&location.bucket, &location.key)?;
        tracing::debug!(%location, size = data.len(), "fetched object");

        // 3. Select transform
        let format = FileFormat::from_key(&location.key)?;

        // 4. Redact
        let (bytes, redactions) = gdpr_transform::redact(format, data, &request.fields)?;
        for info in &redactions {
            tracing::debug!(field = %info.field, count = info.count, "redacted field");
        }
        tracing::info!(%location, %format, size = bytes.len(), "obfuscation complete");

        Ok(Obfuscated {
            bytes,
            format,
            redactions,
        })
    }
}

/// One-shot entry point: parse a JSON request and run it against `fetcher`
pub fn obfuscate_file(json_input: &str, fetcher: &dyn ObjectFetcher) -> Result<Vec<u8>> {
    Obfuscator::new(fetcher).obfuscate_json_request(json_input)
}
