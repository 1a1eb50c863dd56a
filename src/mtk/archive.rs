use std::collections::HashMap;
use std::fmt;

use super::error::{FormatError, Warning};
use super::parser::MtkParser;
use super::structures::{ArchiveHeader, EntryRecord};

/// A decoded MTK archive borrowing its payloads from the input buffer.
#[derive(Debug, Clone)]
pub struct Archive<'a> {
    pub header: ArchiveHeader,
    /// Entry records in on-disk order.
    pub entries: Vec<EntryRecord>,
    /// Advisory conditions found while decoding.
    pub warnings: Vec<Warning>,
    files: Vec<(String, &'a [u8])>,
    index: HashMap<String, usize>,
}

impl<'a> Archive<'a> {
    /// Decode a fully buffered archive.
    ///
    /// Runs header parsing, entry table parsing and payload slicing in a
    /// single pass. A repeated entry name keeps the position of its first
    /// occurrence but takes the payload of the last one.
    ///
    /// # Errors
    ///
    /// Any [`FormatError`]; advisory problems land in [`Archive::warnings`].
    pub fn parse(data: &'a [u8]) -> Result<Self, FormatError> {
        let parser = MtkParser::new(data);

        let (header, cursor, mut warnings) = parser.parse_header()?;
        let (entries, _, entry_warnings) = parser.parse_entries(cursor, header.item_count)?;
        warnings.extend(entry_warnings);

        let mut files: Vec<(String, &'a [u8])> = Vec::with_capacity(entries.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());

        for entry in &entries {
            let payload = parser.payload(entry)?;
            match index.get(&entry.name).copied() {
                Some(slot) => {
                    warnings.push(Warning::DuplicateName(entry.name.clone()));
                    files[slot].1 = payload;
                }
                None => {
                    index.insert(entry.name.clone(), files.len());
                    files.push((entry.name.clone(), payload));
                }
            }
        }

        Ok(Self {
            header,
            entries,
            warnings,
            files,
            index,
        })
    }

    /// Iterate over `(name, payload)` pairs, one per distinct name.
    pub fn files(&self) -> impl Iterator<Item = (&str, &'a [u8])> + '_ {
        self.files.iter().map(|(name, data)| (name.as_str(), *data))
    }

    /// Look up the payload stored under `name`.
    pub fn get(&self, name: &str) -> Option<&'a [u8]> {
        self.index.get(name).map(|&slot| self.files[slot].1)
    }

    /// Number of distinct file names.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Human-readable header and entry table.
    pub fn report(&self) -> Report<'_> {
        Report {
            header: &self.header,
            entries: &self.entries,
        }
    }
}

/// Printable diagnostics report, see [`Archive::report`].
pub struct Report<'r> {
    header: &'r ArchiveHeader,
    entries: &'r [EntryRecord],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>10}  {:>10}  {:<16}  {:>6}  Name",
            "Offset", "Size", "Date", "Zero"
        )?;
        writeln!(f, "{}", "-".repeat(70))?;

        let mut total = 0u64;
        for entry in self.entries {
            writeln!(
                f,
                "{:>10}  {:>10}  {:<16}  {:>6}  {}",
                entry.data_offset,
                entry.data_size,
                entry.date_text(),
                entry.entry_zero,
                entry.name
            )?;
            total += entry.data_size as u64;
        }

        writeln!(f, "{}", "-".repeat(70))?;
        write!(
            f,
            "{:>10}  {:>10}  {:>24}  {} files",
            "",
            total,
            "",
            self.entries.len()
        )
    }
}
