//! Synthetic archive construction for tests.

use super::structures::{ArchiveHeader, EntryRecord};

enum Payload {
    /// Bytes appended to the data blob; offset and size filled in by `build`.
    Data(Vec<u8>),
    /// Offset and size written as-is, nothing appended.
    Raw { offset: u32, size: u32 },
}

struct PendingEntry {
    name: [u8; EntryRecord::NAME_SIZE],
    date: [u8; EntryRecord::DATE_SIZE],
    payload: Payload,
    entry_zero: u32,
}

pub struct ArchiveBuilder {
    magic: [u8; 4],
    unknown1: u16,
    zero_field: u32,
    file_size: Option<u32>,
    entries: Vec<PendingEntry>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            magic: *ArchiveHeader::MAGIC,
            unknown1: 1,
            zero_field: 0,
            file_size: None,
            entries: Vec::new(),
        }
    }

    pub fn magic(mut self, magic: [u8; 4]) -> Self {
        self.magic = magic;
        self
    }

    pub fn unknown1(mut self, value: u16) -> Self {
        self.unknown1 = value;
        self
    }

    pub fn zero_field(mut self, value: u32) -> Self {
        self.zero_field = value;
        self
    }

    /// Override the declared file size (defaults to the real length).
    pub fn file_size(mut self, value: u32) -> Self {
        self.file_size = Some(value);
        self
    }

    pub fn entry(self, name: &str, data: &[u8]) -> Self {
        self.entry_with_date(name, [0; EntryRecord::DATE_SIZE], data)
    }

    pub fn entry_with_date(self, name: &str, date: [u8; 16], data: &[u8]) -> Self {
        self.push(pad_name(name), date, Payload::Data(data.to_vec()), 0)
    }

    pub fn entry_raw_name(self, name: [u8; 48], data: &[u8]) -> Self {
        self.push(name, [0; EntryRecord::DATE_SIZE], Payload::Data(data.to_vec()), 0)
    }

    /// Entry with explicit offset/size that contributes no payload bytes.
    pub fn raw_entry(self, name: &str, offset: u32, size: u32, entry_zero: u32) -> Self {
        self.push(
            pad_name(name),
            [0; EntryRecord::DATE_SIZE],
            Payload::Raw { offset, size },
            entry_zero,
        )
    }

    fn push(
        mut self,
        name: [u8; 48],
        date: [u8; 16],
        payload: Payload,
        entry_zero: u32,
    ) -> Self {
        self.entries.push(PendingEntry {
            name,
            date,
            payload,
            entry_zero,
        });
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let table_end = ArchiveHeader::SIZE + self.entries.len() * EntryRecord::SIZE;

        let mut table = Vec::with_capacity(table_end - ArchiveHeader::SIZE);
        let mut blob = Vec::new();

        for entry in &self.entries {
            let (offset, size) = match &entry.payload {
                Payload::Data(data) => {
                    let offset = (table_end + blob.len()) as u32;
                    blob.extend_from_slice(data);
                    (offset, data.len() as u32)
                }
                Payload::Raw { offset, size } => (*offset, *size),
            };

            table.extend_from_slice(&entry.name);
            table.extend_from_slice(&entry.date);
            table.extend_from_slice(&offset.to_le_bytes());
            table.extend_from_slice(&size.to_le_bytes());
            table.extend_from_slice(&entry.entry_zero.to_le_bytes());
        }

        let total = table_end + blob.len();
        let file_size = self.file_size.unwrap_or(total as u32);

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&(self.entries.len() as u16).to_le_bytes());
        out.extend_from_slice(&self.unknown1.to_le_bytes());
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&self.zero_field.to_le_bytes());
        out.extend_from_slice(&table);
        out.extend_from_slice(&blob);
        out
    }
}

fn pad_name(name: &str) -> [u8; EntryRecord::NAME_SIZE] {
    let mut field = [0u8; EntryRecord::NAME_SIZE];
    field[..name.len()].copy_from_slice(name.as_bytes());
    field
}
