use std::io::Write;
use std::string::String;

use crate::common::{name_to_bytes, slice_to_string, NAME_LENGTH};
use crate::error::{self, BinParseResult};

pub const IWAD_MAGIC: [u8; 4] = *b"IWAD";
pub const PWAD_MAGIC: [u8; 4] = *b"PWAD";

/// Size in bytes of the header at the start of every WAD
pub const HEAD_SIZE: usize = 12;

/// Size in bytes of a single directory record
pub const ENTRY_SIZE: usize = 16;

/// Whether a WAD is a base game archive or a patch loaded on top of one
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WadKind {
    Internal,
    #[default]
    Patch,
}

impl WadKind {
    pub fn magic(self) -> [u8; 4] {
        match self {
            WadKind::Internal => IWAD_MAGIC,
            WadKind::Patch => PWAD_MAGIC,
        }
    }

    pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
        match magic {
            IWAD_MAGIC => Some(WadKind::Internal),
            PWAD_MAGIC => Some(WadKind::Patch),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Head {
    kind: WadKind,
    lump_count: i32,
    directory_offset: i32,
}

impl Head {
    pub fn new(kind: WadKind, lump_count: i32, directory_offset: i32) -> Self {
        Head {
            kind,
            lump_count,
            directory_offset,
        }
    }

    pub fn kind(&self) -> WadKind {
        self.kind
    }

    pub fn lump_count(&self) -> i32 {
        self.lump_count
    }

    pub fn directory_offset(&self) -> i32 {
        self.directory_offset
    }

    /// Emit the header at the writer's current position
    pub fn write_to(&self, writer: &mut impl Write) -> BinParseResult<()> {
        writer.write_all(&self.kind.magic())?;
        writer.write_all(&self.lump_count.to_le_bytes())?;
        writer.write_all(&self.directory_offset.to_le_bytes())?;
        Ok(())
    }
}

impl TryFrom<[u8; HEAD_SIZE]> for Head {
    type Error = error::BinParse;

    fn try_from(bytes: [u8; HEAD_SIZE]) -> Result<Self, Self::Error> {
        let field = |at: usize| -> [u8; 4] {
            [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]
        };

        let magic = field(0);
        let kind = WadKind::from_magic(magic)
            .ok_or(error::BinParse::InvalidMagic(magic))?;

        let lump_count = i32::from_le_bytes(field(4));
        let directory_offset = i32::from_le_bytes(field(8));

        Ok(Head::new(kind, lump_count, directory_offset))
    }
}

/// Provides the location of a lump within a WAD archive, size of the lump,
/// and name (8 bytes, null-padded)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Entry {
    offset: i32,
    size: i32,
    name: [u8; NAME_LENGTH],
}

impl Entry {
    /// Build an entry, encoding `name` into a null-padded field
    pub fn new(offset: i32, size: i32, name: &str) -> BinParseResult<Entry> {
        Ok(Entry {
            offset,
            size,
            name: name_to_bytes(name)?,
        })
    }

    /// Normalized name: trailing padding stripped, upper case
    pub fn name_to_string(&self) -> String {
        slice_to_string(&self.name)
    }

    /// Name in raw bytes
    pub fn name(&self) -> [u8; NAME_LENGTH] {
        self.name
    }

    /// WAD offset of lump
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Size of lump in bytes
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn write_to(&self, writer: &mut impl Write) -> BinParseResult<()> {
        writer.write_all(&self.offset.to_le_bytes())?;
        writer.write_all(&self.size.to_le_bytes())?;
        writer.write_all(&self.name)?;
        Ok(())
    }
}

impl From<[u8; ENTRY_SIZE]> for Entry {
    fn from(bytes: [u8; ENTRY_SIZE]) -> Self {
        let (offset_bytes, rest) = bytes.split_at(4);
        let (size_bytes, name_bytes) = rest.split_at(4);

        let mut offset = [0u8; 4];
        offset.copy_from_slice(offset_bytes);
        let mut size = [0u8; 4];
        size.copy_from_slice(size_bytes);
        let mut name = [0u8; NAME_LENGTH];
        name.copy_from_slice(name_bytes);

        Entry {
            offset: i32::from_le_bytes(offset),
            size: i32::from_le_bytes(size),
            name,
        }
    }
}
