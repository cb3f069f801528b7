//! Filesystem writers shared by format handlers.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use zip::result::ZipError;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;

/// Creates `path` and all missing parents.
///
/// # Errors
///
/// Returns `DestinationUnwritable` if any component cannot be created,
/// including when a regular file already occupies one of them.
pub fn ensure_dir(path: &Path) -> Result<()> {
    create_dir_all(path).map_err(|source| ExtractionError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes one entry's data to `output_path`, truncating any existing file.
///
/// Read failures come from the archive decoder and are reported against
/// `archive_path` as `CorruptArchive`. Everything on the write side is
/// `DestinationUnwritable`.
pub fn write_file<R: Read>(
    reader: &mut R,
    output_path: &Path,
    archive_path: &Path,
    report: &mut ExtractionReport,
    copy_buffer: &mut CopyBuffer,
) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        ensure_dir(parent)?;
    }

    let unwritable = |source| ExtractionError::DestinationUnwritable {
        path: output_path.to_path_buf(),
        source,
    };

    let output_file = File::create(output_path).map_err(unwritable)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, output_file);
    let bytes_written =
        copy_with_buffer(reader, &mut writer, copy_buffer).map_err(|err| match err {
            CopyError::Read(source) => ExtractionError::CorruptArchive {
                path: archive_path.to_path_buf(),
                source: ZipError::Io(source),
            },
            CopyError::Write(source) => unwritable(source),
        })?;
    writer.flush().map_err(unwritable)?;

    report.files_extracted += 1;
    report.bytes_written = report.bytes_written.saturating_add(bytes_written);

    Ok(())
}

/// Creates a directory entry. Existing directories are left as they are and
/// are not counted in the report.
pub fn create_directory(dir_path: &Path, report: &mut ExtractionReport) -> Result<()> {
    let existed = dir_path.is_dir();
    ensure_dir(dir_path)?;
    if !existed {
        report.directories_created += 1;
    }
    Ok(())
}
