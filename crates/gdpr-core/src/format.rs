use std::fmt;

use crate::{Error, Result};

/// Supported file formats, detected from the object key's suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
    Parquet,
}

impl FileFormat {
    /// Checked in this order; matching is case-sensitive
    const SUFFIXES: [(&'static str, FileFormat); 3] = [
        (".csv", FileFormat::Csv),
        (".json", FileFormat::Json),
        (".parquet", FileFormat::Parquet),
    ];

    pub fn from_key(key: &str) -> Result<Self> {
        Self::SUFFIXES
            .iter()
            .find(|(suffix, _)| key.ends_with(suffix))
            .map(|(_, format)| *format)
            .ok_or_else(|| {
                Error::UnsupportedFormat(
                    "Unsupported file type. Only CSV, JSON, and Parquet are supported."
                        .to_string(),
                )
            })
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
            FileFormat::Parquet => "parquet",
        };
        f.write_str(name)
    }
}
