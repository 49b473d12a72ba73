//! Error types for catalog file storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing the catalog file.
///
/// Malformed content is not an error: loading simply stops at the first
/// record that cannot be parsed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be opened, created, read or written.
    #[error("File I/O error on {}", path.display())]
    FileIo {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Path of the file involved.
    pub fn path(&self) -> &std::path::Path {
        match self {
            StorageError::FileIo { path, .. } => path,
        }
    }
}

impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
