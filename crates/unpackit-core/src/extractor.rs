//! Archive extraction into a data directory.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::ExtractionReport;
use crate::ExtractorConfig;
use crate::Result;
use crate::formats::ZipExtractor;

/// Line written before extraction starts.
pub const PROGRESS_NOTICE: &str = "Extracting compressed data...";

/// Extracts `<data_dir>/<archive_name>` into `<data_dir>/<output_subpath>`.
///
/// Construction performs no I/O. Each call to [`extract`](Self::extract)
/// repeats the whole operation, overwriting files from earlier runs.
///
/// # Examples
///
/// ```no_run
/// use unpackit_core::ArchiveExtractor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = ArchiveExtractor::new("olist.zip", "data", "raw");
/// extractor.extract()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveExtractor {
    config: ExtractorConfig,
}

impl ArchiveExtractor {
    /// Creates an extractor. Nothing is checked until extraction runs.
    #[must_use]
    pub fn new(
        archive_name: impl Into<String>,
        data_dir: impl Into<PathBuf>,
        output_subpath: impl Into<PathBuf>,
    ) -> Self {
        Self::from_config(ExtractorConfig::new(archive_name, data_dir, output_subpath))
    }

    /// Creates an extractor from an existing configuration.
    #[must_use]
    pub fn from_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this extractor was built with.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Prints the progress notice to stdout, then extracts every entry.
    ///
    /// Entry names are confined to the output directory: root, `.` and `..`
    /// components are dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// - `ArchiveNotFound` if the archive cannot be opened
    /// - `CorruptArchive` if it is not a valid ZIP or an entry fails to decode
    /// - `DestinationUnwritable` if the output tree cannot be written
    pub fn extract(&self) -> Result<()> {
        self.extract_with_report().map(|_| ())
    }

    /// Same as [`extract`](Self::extract), returning extraction statistics.
    ///
    /// # Errors
    ///
    /// See [`extract`](Self::extract).
    pub fn extract_with_report(&self) -> Result<ExtractionReport> {
        self.extract_with_notice(std::io::stdout().lock())
    }

    /// Same as [`extract_with_report`](Self::extract_with_report), writing
    /// the progress notice to `notice` instead of stdout.
    ///
    /// A failure to write the notice does not affect extraction.
    ///
    /// # Errors
    ///
    /// See [`extract`](Self::extract).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use unpackit_core::ArchiveExtractor;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut log = Vec::new();
    /// let report = ArchiveExtractor::new("olist.zip", "data", "raw").extract_with_notice(&mut log)?;
    /// println!("{} files", report.files_extracted);
    /// # Ok(())
    /// # }
    /// ```
    pub fn extract_with_notice<W: Write>(&self, mut notice: W) -> Result<ExtractionReport> {
        let _ = writeln!(notice, "{PROGRESS_NOTICE}").and_then(|()| notice.flush());

        let start = Instant::now();
        let archive_path = self.config.archive_path();
        let output_dir = self.config.output_dir();
        debug!(
            archive = %archive_path.display(),
            output = %output_dir.display(),
            "starting extraction"
        );

        let mut report = ZipExtractor::open(&archive_path)?.extract_to(&output_dir)?;
        report.duration = start.elapsed();

        debug!(
            files = report.files_extracted,
            directories = report.directories_created,
            bytes = report.bytes_written,
            elapsed_ms = report.duration.as_millis(),
            "extraction complete"
        );

        Ok(report)
    }
}
