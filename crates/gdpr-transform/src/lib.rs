//! Field redaction for CSV, JSON and Parquet content
//!
//! Each transform is a pure function over the raw file bytes and a list of
//! target field names. Matching values are overwritten with
//! [`REDACTION_MARKER`]; everything else is preserved and the content is
//! re-serialized in its original format.

pub mod columnar;
pub mod delimited;
pub mod records;

use bytes::Bytes;
use gdpr_core::{FileFormat, Result};
use serde::{Deserialize, Serialize};

pub use columnar::obfuscate_parquet;
pub use delimited::obfuscate_csv;
pub use records::obfuscate_json;
pub use gdpr_core::REDACTION_MARKER;

/// How many values of one field were overwritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub field: String,
    pub count: usize,
}

/// Redact `fields` in `data`, interpreting it as `format`
///
/// Takes the fetched buffer by value so the Parquet reader can use it
/// without another copy.
pub fn redact(
    format: FileFormat,
    data: Vec<u8>,
    fields: &[String],
) -> Result<(Vec<u8>, Vec<RedactionInfo>)> {
    match format {
        FileFormat::Csv => obfuscate_csv(&data, fields),
        FileFormat::Json => obfuscate_json(&data, fields),
        FileFormat::Parquet => obfuscate_parquet(Bytes::from(data), fields),
    }
}

/// Target names in request order with duplicates removed
pub(crate) fn unique_fields(fields: &[String]) -> Vec<&str> {
    let mut seen = Vec::with_capacity(fields.len());
    for field in fields {
        if !seen.contains(&field.as_str()) {
            seen.push(field.as_str());
        }
    }
    seen
}

/// Build the report for the targets that matched, in target order
pub(crate) fn matched_report(targets: &[&str], counts: &[Option<usize>]) -> Vec<RedactionInfo> {
    targets
        .iter()
        .zip(counts)
        .filter_map(|(field, count)| {
            count.map(|count| RedactionInfo {
                field: field.to_string(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_fields_keeps_order() {
        let fields = vec![
            "email".to_string(),
            "name".to_string(),
            "email".to_string(),
        ];
        assert_eq!(unique_fields(&fields), vec!["email", "name"]);
    }

    #[test]
    fn test_redact_dispatches_on_format() {
        let fields = vec!["name".to_string()];
        let (bytes, info) = redact(FileFormat::Csv, b"id,name\n1,Ann\n".to_vec(), &fields).unwrap();
        assert_eq!(bytes, b"id,name\n1,***\n");
        assert_eq!(info[0].field, "name");

        let (bytes, _) = redact(FileFormat::Json, br#"[{"name":"Ann"}]"#.to_vec(), &fields).unwrap();
        assert_eq!(bytes, br#"[{"name":"***"}]"#);
    }
}
