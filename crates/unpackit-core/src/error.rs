//! Error types for archive extraction operations.

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while extracting an archive.
///
/// Every variant is fatal to the extraction call. Entries written before the
/// failure stay on disk.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The archive file could not be opened for reading.
    #[error("archive not found or unreadable: {path}")]
    ArchiveNotFound {
        /// Resolved path of the archive.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The archive is not a valid ZIP file, or an entry failed to decode.
    #[error("corrupt archive {path}: {source}")]
    CorruptArchive {
        /// Resolved path of the archive.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: ZipError,
    },

    /// A directory or file under the output path could not be created or written.
    #[error("destination not writable: {path}")]
    DestinationUnwritable {
        /// Path that could not be created or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// Returns the filesystem path involved in the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use unpackit_core::ExtractionError;
    /// use std::path::{Path, PathBuf};
    ///
    /// let err = ExtractionError::ArchiveNotFound {
    ///     path: PathBuf::from("data/orders.zip"),
    ///     source: std::io::ErrorKind::NotFound.into(),
    /// };
    /// assert_eq!(err.path(), Path::new("data/orders.zip"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ArchiveNotFound { path, .. }
            | Self::CorruptArchive { path, .. }
            | Self::DestinationUnwritable { path, .. } => path,
        }
    }

    /// Returns `true` if the failure lies with the input archive rather than
    /// the destination.
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(self, Self::ArchiveNotFound { .. } | Self::CorruptArchive { .. })
    }

    /// Returns `true` if the failure lies with the output directory.
    #[must_use]
    pub const fn is_destination_error(&self) -> bool {
        matches!(self, Self::DestinationUnwritable { .. })
    }
}
