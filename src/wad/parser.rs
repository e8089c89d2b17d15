use std::io::{Cursor, Read, Seek, SeekFrom};
use std::vec::Vec;

use crate::error::{BinParse, BinParseResult};
use crate::wad::repr::{Entry, Head, ENTRY_SIZE, HEAD_SIZE};
use crate::wad::store::{Category, Lump, LumpStore};

pub const SPRITE_START: &str = "S_START";
pub const SPRITE_END: &str = "S_END";

/// Lumps following every level marker, in the order they are stored
pub const MAP_LUMP_NAMES: [&str; 10] = [
    "THINGS", "LINEDEFS", "SIDEDEFS", "VERTEXES", "SEGS", "SSECTORS", "NODES",
    "SECTORS", "REJECT", "BLOCKMAP",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LoadOptions {
    /// Leave out the geometry lumps which follow each level marker
    pub exclude_map_data: bool,
}

/// Read the header and every directory record, in on-disk order.  The header
/// is expected at the cursor's current position; offsets are relative to it.
pub fn parse_directory(
    cursor: &mut (impl Seek + Read),
) -> BinParseResult<(Head, Vec<Entry>)> {
    let start = cursor.stream_position()?;
    let available = source_length(cursor, start)?;
    read_directory(cursor, start, available)
}

/// Load every lump of a WAD into a store, owning a copy of its bytes.
///
/// Any lump extending past the end of the source aborts the whole load.  An
/// entry whose name is not 1 to 8 ASCII characters is skipped with a warning.
pub fn load(
    cursor: &mut (impl Seek + Read),
    options: LoadOptions,
) -> BinParseResult<LumpStore> {
    let start = cursor.stream_position()?;
    let available = source_length(cursor, start)?;
    let (head, entries) = read_directory(cursor, start, available)?;
    let mut store = LumpStore::with_kind(head.kind());
    let mut state = ScanState::Plain;

    for entry in &entries {
        let name = entry.name_to_string();
        let (next_state, step) = state.advance(&name, options);
        state = next_state;

        let category = match step {
            Step::Skip => continue,
            Step::Store(category) => category,
        };

        let data = read_lump(cursor, start, available, entry, &name)?;
        let lump = match Lump::new(&name, data, category) {
            Ok(lump) => lump,
            Err(e) => {
                log::warn!("Skipping directory entry `{name}`: {e}");
                continue;
            }
        };

        log::debug!("Loaded `{name}` ({} bytes, {category:?})", lump.size());

        if store.insert(lump).is_some() {
            log::warn!("Duplicate entry `{name}` replaces an earlier lump");
        }
    }

    Ok(store)
}

/// Load a WAD held entirely in memory
pub fn load_bytes(
    bytes: &[u8],
    options: LoadOptions,
) -> BinParseResult<LumpStore> {
    load(&mut Cursor::new(bytes), options)
}

/// True for level markers of the forms `E<digit>M<digit>` and `MAP<nn>`
pub fn is_level_marker(name: &str) -> bool {
    match name.as_bytes() {
        [b'E', episode, b'M', map] => {
            episode.is_ascii_digit() && map.is_ascii_digit()
        }
        [b'M', b'A', b'P', tens, ones] => {
            tens.is_ascii_digit() && ones.is_ascii_digit()
        }
        _ => false,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScanState {
    Plain,
    InSpriteRange,
    SkippingMapLumps { remaining: usize, resume: Category },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Step {
    Skip,
    Store(Category),
}

impl ScanState {
    fn from_category(category: Category) -> Self {
        match category {
            Category::Plain => ScanState::Plain,
            Category::Sprite => ScanState::InSpriteRange,
        }
    }

    fn category(self) -> Category {
        match self {
            ScanState::Plain => Category::Plain,
            ScanState::InSpriteRange => Category::Sprite,
            ScanState::SkippingMapLumps { resume, .. } => resume,
        }
    }

    fn advance(self, name: &str, options: LoadOptions) -> (Self, Step) {
        // Map lumps are skipped by position, whatever their names
        if let ScanState::SkippingMapLumps { remaining, resume } = self {
            let next = if remaining > 1 {
                ScanState::SkippingMapLumps {
                    remaining: remaining - 1,
                    resume,
                }
            } else {
                ScanState::from_category(resume)
            };

            return (next, Step::Skip);
        }

        if name == SPRITE_START {
            (ScanState::InSpriteRange, Step::Skip)
        } else if name == SPRITE_END {
            (ScanState::Plain, Step::Skip)
        } else if is_level_marker(name) {
            let next = if options.exclude_map_data {
                ScanState::SkippingMapLumps {
                    remaining: MAP_LUMP_NAMES.len(),
                    resume: self.category(),
                }
            } else {
                self
            };

            (next, Step::Skip)
        } else {
            (self, Step::Store(self.category()))
        }
    }
}

fn source_length(
    cursor: &mut (impl Seek + Read),
    start: u64,
) -> BinParseResult<u64> {
    let end = cursor.seek(SeekFrom::End(0))?;
    cursor.seek(SeekFrom::Start(start))?;
    Ok(end.saturating_sub(start))
}

fn read_directory(
    cursor: &mut (impl Seek + Read),
    start: u64,
    available: u64,
) -> BinParseResult<(Head, Vec<Entry>)> {
    let mut header_bytes = [0u8; HEAD_SIZE];
    cursor.read_exact(&mut header_bytes[..])?;
    let head = Head::try_from(header_bytes)?;

    let lump_count = u64::try_from(head.lump_count()).map_err(|_| {
        BinParse::MalformedDirectory(format!(
            "negative lump count {}",
            head.lump_count()
        ))
    })?;

    let dir_offset = u64::try_from(head.directory_offset()).map_err(|_| {
        BinParse::MalformedDirectory(format!(
            "negative directory offset {}",
            head.directory_offset()
        ))
    })?;

    // lump_count < 2^31, so this cannot overflow
    let dir_length = lump_count * ENTRY_SIZE as u64;

    if dir_offset + dir_length > available {
        return Err(BinParse::MalformedDirectory(format!(
            "{lump_count} entries at offset {dir_offset} run past the end of \
             the source ({available} bytes)"
        )));
    }

    cursor.seek(SeekFrom::Start(start + dir_offset))?;

    let mut entries = Vec::with_capacity(lump_count as usize);

    for _ in 0..lump_count {
        let mut entry_bytes = [0u8; ENTRY_SIZE];
        cursor.read_exact(&mut entry_bytes[..])?;
        entries.push(Entry::from(entry_bytes));
    }

    Ok((head, entries))
}

fn read_lump(
    cursor: &mut (impl Seek + Read),
    start: u64,
    available: u64,
    entry: &Entry,
    name: &str,
) -> BinParseResult<Vec<u8>> {
    let (offset, size) =
        match (u64::try_from(entry.offset()), u64::try_from(entry.size())) {
            (Ok(offset), Ok(size)) => (offset, size),
            _ => {
                return Err(BinParse::MalformedDirectory(format!(
                    "lump `{name}` has offset {} and size {}",
                    entry.offset(),
                    entry.size()
                )));
            }
        };

    if offset + size > available {
        return Err(BinParse::TruncatedData {
            name: name.into(),
            offset,
            size,
            available,
        });
    }

    cursor.seek(SeekFrom::Start(start + offset))?;
    let mut data = vec![0u8; size as usize];
    cursor.read_exact(&mut data)?;
    Ok(data)
}
