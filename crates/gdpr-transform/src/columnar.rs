//! Parquet column redaction

use std::collections::HashMap;
use std::sync::Arc;

use arrow_array::{ArrayRef, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use bytes::Bytes;
use gdpr_core::{Error, REDACTION_MARKER, Result};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::{RedactionInfo, matched_report, unique_fields};

/// Schema metadata written by pandas; describes the original dtypes
const PANDAS_METADATA_KEY: &str = "pandas";

/// Replace every value of each named column with the redaction marker.
///
/// Matched columns become non-null UTF-8 columns. All other columns keep
/// their values and types. Row count and order are unchanged.
pub fn obfuscate_parquet(data: Bytes, fields: &[String]) -> Result<(Vec<u8>, Vec<RedactionInfo>)> {
    let size = data.len();
    let builder = ParquetRecordBatchReaderBuilder::try_new(data)
        .map_err(|e| Error::format(format!("Malformed Parquet file: {}", e)))?;
    let schema = builder.schema().clone();
    let reader = builder
        .build()
        .map_err(|e| Error::format(format!("Malformed Parquet file: {}", e)))?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::format(format!("Failed to decode Parquet data: {}", e)))?;

    let targets = unique_fields(fields);
    let redacted: Vec<bool> = schema
        .fields()
        .iter()
        .map(|field| targets.contains(&field.name().as_str()))
        .collect();

    for target in &targets {
        if schema.column_with_name(target).is_none() {
            tracing::debug!(field = %target, "column not present in Parquet schema, skipping");
        }
    }

    let output_schema = redacted_schema(&schema, &redacted);
    let mut rows = 0usize;
    let mut buffer = Vec::with_capacity(size);
    {
        let mut writer = ArrowWriter::try_new(&mut buffer, output_schema.clone(), None)
            .map_err(|e| Error::format(format!("Failed to create Parquet writer: {}", e)))?;

        for batch in &batches {
            let columns: Vec<ArrayRef> = batch
                .columns()
                .iter()
                .zip(&redacted)
                .map(|(column, &redact)| {
                    if redact {
                        Arc::new(StringArray::from(vec![REDACTION_MARKER; batch.num_rows()]))
                            as ArrayRef
                    } else {
                        column.clone()
                    }
                })
                .collect();

            let batch = RecordBatch::try_new(output_schema.clone(), columns)
                .map_err(|e| Error::format(format!("Failed to build record batch: {}", e)))?;
            writer
                .write(&batch)
                .map_err(|e| Error::format(format!("Failed to write Parquet data: {}", e)))?;
            rows += batch.num_rows();
        }

        writer
            .close()
            .map_err(|e| Error::format(format!("Failed to finish Parquet file: {}", e)))?;
    }

    let counts: Vec<Option<usize>> = targets
        .iter()
        .map(|target| schema.column_with_name(target).map(|_| rows))
        .collect();

    Ok((buffer, matched_report(&targets, &counts)))
}

/// Widen redacted columns to UTF-8, keeping every other field as-is
fn redacted_schema(schema: &SchemaRef, redacted: &[bool]) -> SchemaRef {
    if !redacted.contains(&true) {
        return schema.clone();
    }

    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .zip(redacted)
        .map(|(field, &redact)| {
            if redact {
                Field::new(field.name(), DataType::Utf8, false)
            } else {
                (**field).clone()
            }
        })
        .collect();

    let mut metadata: HashMap<String, String> = schema.metadata().clone();
    metadata.remove(PANDAS_METADATA_KEY);

    Arc::new(Schema::new_with_metadata(fields, metadata))
}
