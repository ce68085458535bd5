//! CSV redaction

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use gdpr_core::{Error, REDACTION_MARKER, Result};

use crate::{RedactionInfo, matched_report, unique_fields};

/// Redact `fields` in every data row of a CSV file.
///
/// The first row is the header. Target names missing from the header are
/// ignored. Output rows end in `\n` and are quoted only where needed.
pub fn obfuscate_csv(data: &[u8], fields: &[String]) -> Result<(Vec<u8>, Vec<RedactionInfo>)> {
    let text = std::str::from_utf8(data)
        .map_err(|e| Error::format(format!("CSV content is not valid UTF-8: {}", e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.is_empty() {
        return Err(Error::format("CSV file has no header row."));
    }

    let targets = unique_fields(fields);
    let positions: Vec<Vec<usize>> = targets
        .iter()
        .map(|target| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, name)| name == target)
                .map(|(idx, _)| idx)
                .collect()
        })
        .collect();

    for (target, found) in targets.iter().zip(&positions) {
        if found.is_empty() {
            tracing::debug!(field = %target, "field not present in CSV header, skipping");
        }
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(data.len()));
    writer.write_record(&headers).map_err(csv_error)?;

    let mut rows = 0usize;
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(Error::format(format!(
                "CSV row on line {} has {} fields but the header has {}",
                line,
                record.len(),
                headers.len()
            )));
        }

        // Short rows are padded with empty values
        let mut row: Vec<&str> = (0..headers.len())
            .map(|idx| record.get(idx).unwrap_or(""))
            .collect();
        for idx in positions.iter().flatten() {
            row[*idx] = REDACTION_MARKER;
        }

        writer.write_record(&row).map_err(csv_error)?;
        rows += 1;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;

    let counts: Vec<Option<usize>> = positions
        .iter()
        .map(|found| (!found.is_empty()).then_some(rows))
        .collect();

    Ok((bytes, matched_report(&targets, &counts)))
}

fn csv_error(err: csv::Error) -> Error {
    Error::format(format!("Malformed CSV: {}", err))
}
