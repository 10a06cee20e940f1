use csv::ReaderBuilder;

use crate::error::FetchError;

use super::table::{PROXY_COLUMN, SERVER_COLUMN, StatsTable};

/// HAProxy prefixes the CSV header line with a comment marker.
const HEADER_MARKER: &str = "# ";

/// Drops the comment marker in front of the header line.
///
/// Only the very start of the body is inspected and at most one `# ` is
/// removed. A body without the marker is returned untouched.
#[must_use]
pub fn strip_header_marker(body: &str) -> &str {
    body.strip_prefix(HEADER_MARKER)
        .or_else(|| body.strip_prefix('#'))
        .unwrap_or(body)
}

/// Parses a `;csv` stats body into a table.
///
/// Parsing is strict: a row whose column count differs from the header fails
/// the whole body.
///
/// # Errors
///
/// Returns an error when the header is absent, lacks `pxname`/`svname`, or
/// any data row is malformed.
pub fn parse_stats(body: &str) -> Result<StatsTable, FetchError> {
    let body = strip_header_marker(body);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(body.as_bytes());

    let header = reader
        .headers()
        .map_err(|source| FetchError::Header { source })?
        .clone();
    if header.is_empty() {
        return Err(FetchError::MissingHeader);
    }
    for column in [PROXY_COLUMN, SERVER_COLUMN] {
        if !header.iter().any(|name| name == column) {
            return Err(FetchError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for (offset, record) in (2_u64..).zip(reader.records()) {
        let record = record.map_err(|source| FetchError::MalformedRow {
            line: source
                .position()
                .map_or(offset, |position| position.line()),
            source,
        })?;
        records.push(record);
    }

    Ok(StatsTable::new(header, records))
}
