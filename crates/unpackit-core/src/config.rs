//! Extractor configuration.

use std::path::Path;
use std::path::PathBuf;

/// Where to find the archive and where to extract it.
///
/// All three values are stored verbatim. Nothing is checked against the
/// filesystem until extraction runs, so a configuration can be built before
/// the archive or the data directory exist.
///
/// # Examples
///
/// ```
/// use unpackit_core::ExtractorConfig;
/// use std::path::Path;
///
/// let config = ExtractorConfig::new("orders.zip", "data/raw", "extracted");
/// assert_eq!(config.archive_path(), Path::new("data/raw/orders.zip"));
/// assert_eq!(config.output_dir(), Path::new("data/raw/extracted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    archive_name: String,
    data_dir: PathBuf,
    output_subpath: PathBuf,
}

impl ExtractorConfig {
    /// Creates a configuration from the archive file name, the data
    /// directory containing it, and the output path relative to that
    /// directory.
    #[must_use]
    pub fn new(
        archive_name: impl Into<String>,
        data_dir: impl Into<PathBuf>,
        output_subpath: impl Into<PathBuf>,
    ) -> Self {
        Self {
            archive_name: archive_name.into(),
            data_dir: data_dir.into(),
            output_subpath: output_subpath.into(),
        }
    }

    /// Returns the archive file name.
    #[must_use]
    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the output path, relative to the data directory.
    #[must_use]
    pub fn output_subpath(&self) -> &Path {
        &self.output_subpath
    }

    /// Full path of the archive: `data_dir/archive_name`.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(&self.archive_name)
    }

    /// Full extraction destination: `data_dir/output_subpath`.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.data_dir.join(&self.output_subpath)
    }
}
