//! Extracts a ZIP archive found in a data directory into a subdirectory of it.
//!
//! The whole public surface is [`ArchiveExtractor`]: build it from the archive
//! name, the data directory and the output path relative to that directory,
//! then call [`ArchiveExtractor::extract`]. A single progress line is printed
//! to stdout before any I/O happens.
//!
//! # Examples
//!
//! ```no_run
//! use unpackit_core::ArchiveExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Writes data/raw/extracted/orders.csv, data/raw/extracted/items/items.csv, ...
//! ArchiveExtractor::new("orders.zip", "data/raw", "extracted").extract()?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod copy;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod report;
pub mod test_utils;

pub use config::ExtractorConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use extractor::ArchiveExtractor;
pub use extractor::PROGRESS_NOTICE;
pub use report::ExtractionReport;
