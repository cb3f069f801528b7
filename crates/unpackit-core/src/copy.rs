//! Buffered copy that tells decoder failures apart from write failures.
//!
//! Entry readers from the ZIP decoder surface bad compressed data and CRC
//! mismatches as read errors, while a full disk or a revoked permission
//! surfaces as a write error. Callers map the two sides to different
//! extraction errors, so [`copy_with_buffer`] keeps them separate instead of
//! collapsing both into one `io::Error` like `std::io::copy` does.

use std::io;
use std::io::Read;
use std::io::Write;

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable copy buffer, shared across all entries of one extraction.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of a copy failed.
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source failed.
    Read(io::Error),
    /// Writing to the destination failed.
    Write(io::Error),
}

/// Copies `reader` into `writer` using `buffer`, returning the byte count.
///
/// Interrupted reads are retried.
///
/// # Errors
///
/// Returns [`CopyError::Read`] or [`CopyError::Write`] depending on which
/// side failed.
pub fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, CopyError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        total = total.saturating_add(bytes_read as u64);
    }

    Ok(total)
}
