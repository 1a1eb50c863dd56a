//! # unmtk
//!
//! Unpacker for `MTK-` archive containers.
//!
//! An MTK archive is a 16-byte header, a table of fixed 76-byte entry
//! records, and the concatenated member payloads. This library decodes a
//! fully buffered archive into a name → payload mapping that borrows from
//! the input, and writes the members into a directory.
//!
//! ## Features
//!
//! - Read archives from a local file, standard input, or an HTTP/HTTPS URL
//! - Strict bounds checking of every member before it is sliced
//! - Fatal format errors kept apart from advisory warnings
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use unmtk::{Archive, LocalFileReader, MtkExtractor, Source};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let data = LocalFileReader::new(Path::new("firmware.mtk")).read_all().await?;
//!     let archive = Archive::parse(&data)?;
//!
//!     for warning in &archive.warnings {
//!         eprintln!("* warning: {warning}");
//!     }
//!
//!     MtkExtractor::new("out").extract_all(&archive, |_| Ok(())).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod io;
pub mod mtk;

pub use cli::Cli;
pub use io::{HttpReader, LocalFileReader, Source, StdinReader};
pub use mtk::{Archive, FormatError, MtkExtractor, Warning};
