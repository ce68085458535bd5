//! JSON record-list redaction

use gdpr_core::{Error, REDACTION_MARKER, Result};
use serde_json::Value;

use crate::{RedactionInfo, matched_report, unique_fields};

/// Redact `fields` in a JSON array of objects.
///
/// Each record is matched against its own keys, so a field missing from one
/// record and present in another is only redacted where it exists.
pub fn obfuscate_json(data: &[u8], fields: &[String]) -> Result<(Vec<u8>, Vec<RedactionInfo>)> {
    let document: Value = serde_json::from_slice(data)
        .map_err(|e| Error::format(format!("Malformed JSON: {}", e)))?;

    let Value::Array(mut records) = document else {
        return Err(Error::format("JSON content must be an array of records"));
    };

    let targets = unique_fields(fields);
    let mut counts: Vec<Option<usize>> = vec![None; targets.len()];

    for (idx, record) in records.iter_mut().enumerate() {
        let Value::Object(record) = record else {
            return Err(Error::format(format!(
                "JSON record {} is not an object",
                idx
            )));
        };

        for (target, count) in targets.iter().zip(counts.iter_mut()) {
            if let Some(value) = record.get_mut(*target) {
                *value = Value::String(REDACTION_MARKER.to_string());
                *count.get_or_insert(0) += 1;
            }
        }
    }

    let bytes = serde_json::to_vec(&records)
        .map_err(|e| Error::format(format!("Failed to serialize JSON: {}", e)))?;

    Ok((bytes, matched_report(&targets, &counts)))
}
