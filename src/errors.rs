use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a column scan. Results are all-or-nothing: any variant means no
/// report was produced.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read record {record}: {source}")]
    RowRead {
        record: u64,
        #[source]
        source: RowError,
    },
}

impl ScanError {
    pub fn is_open_error(&self) -> bool {
        matches!(self, ScanError::Open { .. })
    }

    pub fn is_row_error(&self) -> bool {
        matches!(self, ScanError::RowRead { .. })
    }
}

/// Why a single record could not be folded into the column state.
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Parse(#[from] csv::Error),

    #[error("record has {found} fields but the header declares {expected}")]
    TooManyFields { expected: usize, found: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelimiterError {
    #[error("delimiter '{0}' is not a single-byte (ASCII) character")]
    NotAscii(char),

    #[error("delimiter {0:?} clashes with the record terminator or the quote character")]
    Invalid(char),
}
