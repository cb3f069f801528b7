//! ZIP archive format handler.

use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use zip::ZipArchive;

use super::common::create_directory;
use super::common::ensure_dir;
use super::common::write_file;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;

/// An opened ZIP archive whose central directory has been parsed.
///
/// The underlying reader is owned by this value and released when it drops.
pub struct ZipExtractor<R> {
    archive: ZipArchive<R>,
    path: PathBuf,
}

/// Maps an entry name to a path relative to the output directory.
///
/// Root, `.`, `..` and empty components are dropped, so `../x.txt` becomes
/// `x.txt`, `/etc/passwd` becomes `etc/passwd` and `a/../b.txt` becomes
/// `a/b.txt`. Returns `None` when no component is left.
pub fn sanitize_entry_name(name: &str) -> Option<PathBuf> {
    let relative: PathBuf = name
        .split('/')
        .flat_map(|segment| Path::new(segment).components())
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    (!relative.as_os_str().is_empty()).then_some(relative)
}

impl ZipExtractor<File> {
    /// Opens the ZIP file at `path` and reads its central directory.
    ///
    /// Nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveNotFound` if the file cannot be opened or is a
    /// directory, and `CorruptArchive` if it is not a readable ZIP archive.
    pub fn open(path: &Path) -> Result<Self> {
        let not_found = |source| ExtractionError::ArchiveNotFound {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(not_found)?;
        if file.metadata().map_err(not_found)?.is_dir() {
            return Err(not_found(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "archive path is a directory",
            )));
        }

        Self::new(file, path)
    }
}

impl<R: Read + Seek> ZipExtractor<R> {
    /// Wraps an already opened reader. `path` is used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `CorruptArchive` if the central directory cannot be parsed.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match ZipArchive::new(reader) {
            Ok(archive) => Ok(Self { archive, path }),
            Err(source) => Err(ExtractionError::CorruptArchive { path, source }),
        }
    }

    /// Number of entries in the central directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Extracts every entry under `output_dir`, creating it if needed.
    ///
    /// Entries are processed in central directory order, with names passed
    /// through [`sanitize_entry_name`]; entries whose name sanitizes to
    /// nothing are skipped. Existing files at colliding paths are
    /// overwritten. Entries flagged as symlinks are written as regular files
    /// holding the link target.
    ///
    /// # Errors
    ///
    /// Stops at the first failing entry. Entries written before it remain.
    pub fn extract_to(&mut self, output_dir: &Path) -> Result<ExtractionReport> {
        let mut report = ExtractionReport::new();
        let mut copy_buffer = CopyBuffer::new();

        ensure_dir(output_dir)?;

        for index in 0..self.archive.len() {
            let mut entry =
                self.archive
                    .by_index(index)
                    .map_err(|source| ExtractionError::CorruptArchive {
                        path: self.path.clone(),
                        source,
                    })?;

            let Some(relative) = sanitize_entry_name(entry.name()) else {
                debug!(entry = entry.name(), "skipping entry with empty name");
                continue;
            };
            let target = output_dir.join(&relative);

            if entry.is_dir() {
                create_directory(&target, &mut report)?;
            } else {
                write_file(
                    &mut entry,
                    &target,
                    &self.path,
                    &mut report,
                    &mut copy_buffer,
                )?;
            }

            debug!(
                entry = %relative.display(),
                size = entry.size(),
                compressed = entry.compressed_size(),
                "extracted entry"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_utils::ZipTestBuilder;
    use crate::test_utils::create_test_zip;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn extractor(data: Vec<u8>) -> ZipExtractor<Cursor<Vec<u8>>> {
        ZipExtractor::new(Cursor::new(data), "test.zip").expect("valid archive")
    }

    #[test]
    fn test_extract_files_and_directories() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let data = ZipTestBuilder::new()
            .add_directory("docs/")
            .add_file("docs/readme.txt", b"hello".as_slice())
            .add_file("top.txt", b"world!".as_slice())
            .build();

        let mut zip = extractor(data);
        assert_eq!(zip.len(), 3);

        let report = zip.extract_to(temp.path()).unwrap();
        assert_eq!(report.files_extracted, 2);
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.bytes_written, 11);
        assert_eq!(
            std::fs::read(temp.path().join("docs/readme.txt")).unwrap(),
            b"hello"
        );
        assert_eq!(std::fs::read(temp.path().join("top.txt")).unwrap(), b"world!".as_slice());
    }

    #[test]
    fn test_extract_creates_missing_output_dir() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let output = temp.path().join("deep/output");
        let mut zip = extractor(create_test_zip(vec![("a.txt", b"a".as_slice())]));

        zip.extract_to(&output).unwrap();
        assert!(output.join("a.txt").is_file());
    }

    #[test]
    fn test_deflated_entries_decode() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let content = b"order_id,customer_id\n".repeat(200);
        let data = ZipTestBuilder::new()
            .add_deflated_file("orders.csv", &content)
            .build();

        extractor(data).extract_to(temp.path()).unwrap();
        assert_eq!(std::fs::read(temp.path().join("orders.csv")).unwrap(), content);
    }

    #[test]
    fn test_sanitize_entry_name() {
        let cases = [
            ("a/b.txt", Some("a/b.txt")),
            ("../x.txt", Some("x.txt")),
            ("../../a/b.txt", Some("a/b.txt")),
            ("/etc/passwd", Some("etc/passwd")),
            ("a/../b.txt", Some("a/b.txt")),
            ("./a//b/", Some("a/b")),
            ("docs/", Some("docs")),
            ("../", None),
            ("/", None),
            ("", None),
        ];

        for (name, expected) in cases {
            assert_eq!(
                sanitize_entry_name(name),
                expected.map(PathBuf::from),
                "entry name {name:?}"
            );
        }
    }

    #[test]
    fn test_parent_components_stay_inside_output() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let output = temp.path().join("out");
        let data = ZipTestBuilder::new()
            .add_file("ok.txt", b"fine".as_slice())
            .add_file("../x.txt", b"escaped".as_slice())
            .add_file("a/../b.txt", b"nested".as_slice())
            .build();

        let report = extractor(data).extract_to(&output).unwrap();

        assert_eq!(report.files_extracted, 3);
        assert_eq!(std::fs::read(output.join("ok.txt")).unwrap(), b"fine");
        assert_eq!(std::fs::read(output.join("x.txt")).unwrap(), b"escaped");
        assert_eq!(std::fs::read(output.join("a/b.txt")).unwrap(), b"nested");
        assert!(!temp.path().join("x.txt").exists());
        assert!(!output.join("b.txt").exists());
    }

    #[test]
    fn test_absolute_entry_written_under_output() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let output = temp.path().join("out");
        let data = create_test_zip(vec![("/abs_marker.txt", b"root".as_slice())]);

        let report = extractor(data).extract_to(&output).unwrap();

        assert_eq!(report.files_extracted, 1);
        assert_eq!(std::fs::read(output.join("abs_marker.txt")).unwrap(), b"root");
        assert!(!Path::new("/abs_marker.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_entry_written_as_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let data = ZipTestBuilder::new()
            .add_file("target.txt", b"content".as_slice())
            .add_symlink("link", "target.txt")
            .build();

        extractor(data).extract_to(temp.path()).unwrap();

        let link = temp.path().join("link");
        let meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(meta.file_type().is_file());
        assert_eq!(std::fs::read(&link).unwrap(), b"target.txt".as_slice());
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let result = ZipExtractor::new(Cursor::new(b"definitely not a zip".to_vec()), "junk.zip");
        assert!(matches!(
            result,
            Err(ExtractionError::CorruptArchive { path, .. }) if path == Path::new("junk.zip")
        ));
    }

    #[test]
    fn test_empty_archive() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let mut zip = extractor(ZipTestBuilder::new().build());
        assert!(zip.is_empty());

        let report = zip.extract_to(&temp.path().join("out")).unwrap();
        assert_eq!(report.total_items(), 0);
        assert!(temp.path().join("out").is_dir());
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let result = ZipExtractor::open(&temp.path().join("missing.zip"));
        assert!(matches!(
            result,
            Err(ExtractionError::ArchiveNotFound { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_open_directory_is_not_found() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let result = ZipExtractor::open(temp.path());
        assert!(matches!(result, Err(ExtractionError::ArchiveNotFound { .. })));
    }
}
