//! Errors that stop the catalog from loading.
//!
//! Queries never fail: an empty result is reported as a value by the
//! query functions, not through this type.

use std::path::PathBuf;

use thiserror::Error;

use crate::movies::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file path \"{}\" not found, please try again", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("malformed movie on line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: ParseError,
    },
    #[error("error during CSV processing: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
