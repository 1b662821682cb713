use std::io;
use std::path::{Path, PathBuf};

use sscluster_core::RecordError;
use thiserror::Error;

/// Error type for sscluster-io operations.
#[derive(Error, Debug)]
pub enum FileError {
    /// Input path does not exist or is not a file.
    #[error("Input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A row could not be turned into a record.
    #[error("{}:{line}: {source}", path.display())]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: RecordError,
    },

    /// Delimited-text read or write error.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Opening, decompressing or decoding a file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Attach the path of the file being read to an io error.
    pub fn io(path: &Path) -> impl Fn(io::Error) -> FileError + '_ {
        move |source| FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for sscluster-io operations.
pub type Result<T> = std::result::Result<T, FileError>;
