//! Fatal and advisory conditions raised while decoding an archive.

use std::fmt;

use thiserror::Error;

/// Conditions that abort decoding of the whole archive.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Reading a fixed-size structure failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer too small to hold the 16-byte header.
    #[error("truncated header: need 16 bytes, got {len}")]
    TruncatedHeader { len: usize },

    /// The first four bytes are not `MTK-`.
    #[error("bad magic: expected 'MTK-', got {0:02x?}")]
    BadMagic([u8; 4]),

    /// A declared entry record runs past the end of the buffer.
    #[error("truncated entry table: entry {index} at offset {offset} needs 76 bytes, {remaining} remain")]
    TruncatedEntryTable {
        index: usize,
        offset: usize,
        remaining: usize,
    },

    /// An entry's payload range lies outside the buffer.
    #[error("entry out of range: '{name}' spans {offset}+{size}, buffer is {len} bytes")]
    EntryOutOfRange {
        name: String,
        offset: u32,
        size: u32,
        len: usize,
    },

    /// An entry name would resolve outside the output directory.
    #[error("unsafe entry name: {0:?}")]
    UnsafeName(String),
}

/// Unexpected but harmless field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnexpectedUnknown1(u16),
    NonZeroHeaderField(u32),
    FileSizeMismatch { declared: u32, actual: usize },
    NonZeroEntryField { name: String, value: u32 },
    DuplicateName(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnexpectedUnknown1(v) => write!(f, "header unknown1 is {v}, expected 1"),
            Warning::NonZeroHeaderField(v) => write!(f, "header zero field is {v:#x}, expected 0"),
            Warning::FileSizeMismatch { declared, actual } => write!(
                f,
                "header declares file size {declared}, input is {actual} bytes"
            ),
            Warning::NonZeroEntryField { name, value } => {
                write!(f, "{name}: trailing entry field is {value:#x}, expected 0")
            }
            Warning::DuplicateName(name) => {
                write!(f, "{name}: duplicate entry name, later entry replaces earlier one")
            }
        }
    }
}
