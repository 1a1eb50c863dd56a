use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt;
use std::io::{Cursor, Read};

use super::error::FormatError;

/// Archive header - 16 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHeader {
    pub magic: [u8; 4],
    pub item_count: u16,
    pub unknown1: u16,
    pub file_size: u32,
    pub zero_field: u32,
}

impl ArchiveHeader {
    pub const MAGIC: &'static [u8; 4] = b"MTK-";
    pub const SIZE: usize = 16;

    /// Expected value of `unknown1` in every archive seen so far.
    pub const EXPECTED_UNKNOWN1: u16 = 1;

    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        if data.len() < Self::SIZE {
            return Err(FormatError::TruncatedHeader { len: data.len() });
        }

        let mut cursor = Cursor::new(&data[..Self::SIZE]);

        let mut magic = [0u8; 4];
        cursor.read_exact(&mut magic)?;

        // Verify magic before touching anything else
        if &magic != Self::MAGIC {
            return Err(FormatError::BadMagic(magic));
        }

        Ok(Self {
            magic,
            item_count: cursor.read_u16::<LittleEndian>()?,
            unknown1: cursor.read_u16::<LittleEndian>()?,
            file_size: cursor.read_u32::<LittleEndian>()?,
            zero_field: cursor.read_u32::<LittleEndian>()?,
        })
    }
}

/// Entry table record - 76 bytes (48 + 16 + 4 + 4 + 4)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Name with trailing NUL/space padding removed.
    pub name: String,
    /// Opaque timestamp blob, kept verbatim.
    pub date: [u8; 16],
    pub data_offset: u32,
    pub data_size: u32,
    pub entry_zero: u32,
}

impl EntryRecord {
    pub const NAME_SIZE: usize = 48;
    pub const DATE_SIZE: usize = 16;
    pub const SIZE: usize = Self::NAME_SIZE + Self::DATE_SIZE + 4 + 4 + 4;

    /// Parse one record from exactly [`EntryRecord::SIZE`] bytes.
    pub fn from_bytes(data: &[u8]) -> std::io::Result<Self> {
        let mut cursor = Cursor::new(data);

        let mut name = [0u8; Self::NAME_SIZE];
        cursor.read_exact(&mut name)?;
        let mut date = [0u8; Self::DATE_SIZE];
        cursor.read_exact(&mut date)?;

        Ok(Self {
            name: String::from_utf8_lossy(trim_padding(&name)).into_owned(),
            date,
            data_offset: cursor.read_u32::<LittleEndian>()?,
            data_size: cursor.read_u32::<LittleEndian>()?,
            entry_zero: cursor.read_u32::<LittleEndian>()?,
        })
    }

    /// End of the payload range, or `None` if it overflows `usize`.
    pub fn data_end(&self) -> Option<usize> {
        (self.data_offset as usize).checked_add(self.data_size as usize)
    }

    /// The date blob as printable text, padding removed.
    pub fn date_text(&self) -> String {
        String::from_utf8_lossy(trim_padding(&self.date))
            .chars()
            .map(|c| if c.is_control() { '.' } else { c })
            .collect()
    }
}

/// Strip trailing NUL and space bytes from a fixed-width field.
pub fn trim_padding(field: &[u8]) -> &[u8] {
    let end = field
        .iter()
        .rposition(|&b| b != 0 && b != b' ')
        .map_or(0, |i| i + 1);
    &field[..end]
}

impl fmt::Display for ArchiveHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "magic:      {}", String::from_utf8_lossy(&self.magic))?;
        writeln!(f, "items:      {}", self.item_count)?;
        writeln!(f, "unknown1:   {}", self.unknown1)?;
        writeln!(f, "file size:  {}", self.file_size)?;
        write!(f, "zero field: {}", self.zero_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_nul_and_space_padding() {
        assert_eq!(trim_padding(b"hello.txt\0\0\0"), b"hello.txt");
        assert_eq!(trim_padding(b"hello.txt \0 \0"), b"hello.txt");
        assert_eq!(trim_padding(b"\0\0\0"), b"");
        // Only trailing padding is removed
        assert_eq!(trim_padding(b"a\0b\0"), b"a\0b");
    }

    #[test]
    fn header_rejects_short_buffer() {
        let err = ArchiveHeader::from_bytes(b"MTK-\x01\x00").unwrap_err();
        assert!(matches!(err, FormatError::TruncatedHeader { len: 6 }));
    }

    #[test]
    fn header_reads_little_endian_fields() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"MTK-");
        buf.extend_from_slice(&3u16.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&0x1234_5678u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());

        let header = ArchiveHeader::from_bytes(&buf).unwrap();
        assert_eq!(header.item_count, 3);
        assert_eq!(header.unknown1, 1);
        assert_eq!(header.file_size, 0x1234_5678);
        assert_eq!(header.zero_field, 0);
    }

    #[test]
    fn entry_record_layout() {
        assert_eq!(EntryRecord::SIZE, 76);

        let mut buf = vec![0u8; EntryRecord::SIZE];
        buf[..7].copy_from_slice(b"fw.bin ");
        buf[48..58].copy_from_slice(b"2024-01-02");
        buf[64..68].copy_from_slice(&100u32.to_le_bytes());
        buf[68..72].copy_from_slice(&20u32.to_le_bytes());
        buf[72..76].copy_from_slice(&7u32.to_le_bytes());

        let entry = EntryRecord::from_bytes(&buf).unwrap();
        assert_eq!(entry.name, "fw.bin");
        assert_eq!(entry.date_text(), "2024-01-02");
        assert_eq!(entry.data_offset, 100);
        assert_eq!(entry.data_size, 20);
        assert_eq!(entry.entry_zero, 7);
        assert_eq!(entry.data_end(), Some(120));
    }
}
