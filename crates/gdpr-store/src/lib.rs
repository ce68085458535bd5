//! Object stores for gdpr-obfuscator
//!
//! This crate provides:
//! - Local filesystem store (bucket = directory)
//! - In-memory store
//! - Unsigned HTTP store for S3-compatible endpoints

pub mod http;
pub mod local;
pub mod memory;

use gdpr_core::{ObjectFetcher, ObjectWriter};

pub use http::HttpStore;
pub use local::LocalStore;
pub use memory::MemoryStore;

/// A store that can both fetch and put objects
pub trait ObjectStore: ObjectFetcher + ObjectWriter {}

impl<T: ObjectFetcher + ObjectWriter> ObjectStore for T {}
