use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, trace};

use crate::errors::{DelimiterError, RowError, ScanError};
use crate::models::ScanReport;
use crate::progress::ProgressTracker;

pub const DEFAULT_DELIMITER: u8 = b',';

/// Rows between two throughput log lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Picks the delimiter byte from user input: empty means comma, otherwise only
/// the first character counts and it has to fit in one byte.
pub fn resolve_delimiter(delimiter: &str) -> Result<u8, DelimiterError> {
    match delimiter.chars().next() {
        None => Ok(DEFAULT_DELIMITER),
        // the parser would silently split records on these
        Some(c @ ('\n' | '\r' | '"')) => Err(DelimiterError::Invalid(c)),
        Some(c) if c.is_ascii() => Ok(c as u8),
        Some(c) => Err(DelimiterError::NotAscii(c)),
    }
}

/// Scans the CSV file at `path` for columns that never hold a non-empty value.
///
/// The file handle lives only for the duration of the call and is dropped on
/// every exit path.
pub fn check_empty_columns(path: &Path, delimiter: u8) -> Result<ScanReport, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), delimiter = %(delimiter as char), "scanning file");
    scan_reader(BufReader::new(file), delimiter)
}

/// Single pass over `reader`: the first record is the header, every following
/// record is folded into one flag per column and then dropped.
pub fn scan_reader<R: Read>(reader: R, delimiter: u8) -> Result<ScanReport, ScanError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut record = StringRecord::new();

    let has_header = rdr
        .read_record(&mut record)
        .map_err(|e| row_error(1, e.into()))?;
    if !has_header {
        debug!("empty source, nothing to check");
        return Ok(ScanReport::default());
    }

    let header: Vec<String> = record.iter().map(str::to_string).collect();
    let num_col = header.len();
    debug!(columns = num_col, "header read");

    let mut has_value = vec![false; num_col];
    let mut progress = ProgressTracker::new(PROGRESS_INTERVAL);
    let mut rows: u64 = 0;

    loop {
        // header is record 1
        let record_no = rows + 2;
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) => return Err(row_error(record_no, e.into())),
        }

        if record.len() > num_col {
            return Err(row_error(
                record_no,
                RowError::TooManyFields {
                    expected: num_col,
                    found: record.len(),
                },
            ));
        }
        if record.len() < num_col {
            trace!(record = record_no, found = record.len(), expected = num_col, "short row");
        }

        for (seen, cell) in has_value.iter_mut().zip(record.iter()) {
            if !cell.is_empty() {
                *seen = true;
            }
        }

        rows += 1;
        progress.update(rows);
    }

    progress.finish();

    let report = ScanReport::from_state(&header, &has_value, progress.total());
    info!(
        columns = report.columns,
        rows = report.rows,
        empty = report.empty_indices.len(),
        "column check finished"
    );
    Ok(report)
}

fn row_error(record: u64, source: RowError) -> ScanError {
    ScanError::RowRead { record, source }
}
