//! Core domain models for gdpr-obfuscator
//!
//! This crate contains:
//! - Domain models (ObfuscationRequest, S3Location, FileFormat)
//! - The shared error type
//! - The object fetch/write capabilities the engine consumes

pub mod error;
pub mod fetch;
pub mod format;
pub mod location;
pub mod request;

pub use error::{Error, Result};
pub use fetch::{ObjectFetcher, ObjectWriter};
pub use format::FileFormat;
pub use location::S3Location;
pub use request::ObfuscationRequest;

/// Value written in place of every redacted field
pub const REDACTION_MARKER: &str = "***";
