//! Low-level MTK archive parser.
//!
//! The parser never mutates shared state: each step takes the buffer and a
//! cursor and hands back the parsed value together with the next cursor
//! position and any advisory warnings it raised.
//!
//! ## Parsing Strategy
//!
//! 1. Read the 16-byte header at offset 0 and check the magic
//! 2. Read `item_count` fixed 76-byte entry records following the header
//! 3. Bounds-check each entry's payload range before it is ever sliced

use super::error::{FormatError, Warning};
use super::structures::{ArchiveHeader, EntryRecord};

/// Low-level MTK parser over a fully buffered archive.
///
/// Typically used through [`Archive::parse`](super::Archive::parse)
/// rather than directly.
///
/// ## Example
///
/// ```ignore
/// let parser = MtkParser::new(&data);
/// let (header, cursor, warnings) = parser.parse_header()?;
/// let (entries, _, more) = parser.parse_entries(cursor, header.item_count)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MtkParser<'a> {
    data: &'a [u8],
}

impl<'a> MtkParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Parse and check the archive header.
    ///
    /// # Returns
    ///
    /// The header, the cursor positioned just past it, and warnings for
    /// advisory fields holding unexpected values.
    ///
    /// # Errors
    ///
    /// Fails on a buffer shorter than 16 bytes or a magic other than `MTK-`.
    pub fn parse_header(&self) -> Result<(ArchiveHeader, usize, Vec<Warning>), FormatError> {
        let header = ArchiveHeader::from_bytes(self.data)?;
        let warnings = self.header_warnings(&header);
        Ok((header, ArchiveHeader::SIZE, warnings))
    }

    fn header_warnings(&self, header: &ArchiveHeader) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if header.unknown1 != ArchiveHeader::EXPECTED_UNKNOWN1 {
            warnings.push(Warning::UnexpectedUnknown1(header.unknown1));
        }
        if header.zero_field != 0 {
            warnings.push(Warning::NonZeroHeaderField(header.zero_field));
        }
        // Only meaningful because the whole input is already in memory
        if header.file_size as usize != self.data.len() {
            warnings.push(Warning::FileSizeMismatch {
                declared: header.file_size,
                actual: self.data.len(),
            });
        }

        warnings
    }

    /// Parse the single entry record at `cursor`.
    ///
    /// `index` is only used for error reporting.
    pub fn parse_entry(
        &self,
        cursor: usize,
        index: usize,
    ) -> Result<(EntryRecord, usize), FormatError> {
        let remaining = self.data.len().saturating_sub(cursor);
        if remaining < EntryRecord::SIZE {
            return Err(FormatError::TruncatedEntryTable {
                index,
                offset: cursor,
                remaining,
            });
        }

        let entry = EntryRecord::from_bytes(&self.data[cursor..cursor + EntryRecord::SIZE])?;
        Ok((entry, cursor + EntryRecord::SIZE))
    }

    /// Parse `count` consecutive entry records starting at `cursor`.
    ///
    /// Every entry's payload range is validated against the buffer, so
    /// the returned records can be sliced with [`MtkParser::payload`]
    /// without further checks.
    pub fn parse_entries(
        &self,
        cursor: usize,
        count: u16,
    ) -> Result<(Vec<EntryRecord>, usize, Vec<Warning>), FormatError> {
        let init = (Vec::with_capacity(count as usize), cursor, Vec::new());

        (0..count as usize).try_fold(init, |(mut entries, cursor, mut warnings), index| {
            let (entry, next) = self.parse_entry(cursor, index)?;
            self.check_range(&entry)?;

            if entry.entry_zero != 0 {
                warnings.push(Warning::NonZeroEntryField {
                    name: entry.name.clone(),
                    value: entry.entry_zero,
                });
            }

            entries.push(entry);
            Ok((entries, next, warnings))
        })
    }

    fn check_range(&self, entry: &EntryRecord) -> Result<(), FormatError> {
        match entry.data_end() {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(FormatError::EntryOutOfRange {
                name: entry.name.clone(),
                offset: entry.data_offset,
                size: entry.data_size,
                len: self.data.len(),
            }),
        }
    }

    /// Borrow the payload bytes of `entry` from the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::EntryOutOfRange`] if the payload range does
    /// not fit inside the buffer.
    pub fn payload(&self, entry: &EntryRecord) -> Result<&'a [u8], FormatError> {
        self.check_range(entry)?;
        let start = entry.data_offset as usize;
        Ok(&self.data[start..start + entry.data_size as usize])
    }
}
