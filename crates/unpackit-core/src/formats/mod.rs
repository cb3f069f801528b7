//! Archive format implementations.

mod common;
pub mod zip;

pub use zip::ZipExtractor;
