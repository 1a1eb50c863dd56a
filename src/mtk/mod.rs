//! MTK archive parsing and extraction.
//!
//! ## Architecture
//!
//! - [`structures`]: fixed-size on-disk records (header, entry)
//! - [`parser`]: cursor-threaded parsing of a fully buffered archive
//! - [`archive`]: the decoded archive with its name → payload mapping
//! - [`extractor`]: writing members into an output directory
//! - [`error`]: fatal [`FormatError`] and advisory [`Warning`]
//!
//! ## MTK Format Overview
//!
//! All integers are little-endian.
//!
//! 1. 16-byte header: `MTK-` magic, u16 entry count, u16 (always 1),
//!    u32 total file size, u32 zero
//! 2. One 76-byte record per entry: 48-byte padded name, 16-byte date,
//!    u32 data offset, u32 data size, u32 zero
//! 3. Concatenated member payloads
//!
//! ## Limitations
//!
//! - No compression or encryption (the format has neither)
//! - The whole archive must be in memory

mod archive;
mod error;
mod extractor;
mod parser;
mod structures;

#[cfg(test)]
pub(crate) mod testutil;

pub use archive::{Archive, Report};
pub use error::{FormatError, Warning};
pub use extractor::MtkExtractor;
pub use parser::MtkParser;
pub use structures::*;
