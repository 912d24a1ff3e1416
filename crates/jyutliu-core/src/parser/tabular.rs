//! Tabular parsing with a preferred-column header convention.

use csv::ReaderBuilder;

use crate::error::Result;

/// Column names that identify the text column, checked in this priority
/// order against a lowercased header row.
const COLUMN_PREFERENCE: &[&str] = &["text", "content", "sentence", "line"];

/// Extracts one raw line per row.
///
/// When the first row names one of [`COLUMN_PREFERENCE`], that column
/// is taken from every subsequent row. Otherwise no header is assumed
/// and the first column of every row (including the first) is taken.
///
/// # Errors
///
/// Propagates `CurateError::Csv` for malformed records. Encoding damage
/// never reaches this function; content is lossily decoded upstream.
pub fn parse_tabular(content: &str) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }
    let Some((header, rest)) = records.split_first() else {
        return Ok(Vec::new());
    };

    let header_cols: Vec<String> = header
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    let preferred = COLUMN_PREFERENCE
        .iter()
        .find_map(|cand| header_cols.iter().position(|h| h == cand));

    let lines = match preferred {
        Some(col) => rest
            .iter()
            .filter_map(|record| record.get(col))
            .map(str::to_string)
            .collect(),
        None => records
            .iter()
            .filter_map(|record| record.get(0))
            .map(str::to_string)
            .collect(),
    };
    Ok(lines)
}
