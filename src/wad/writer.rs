use std::io::{Cursor, Seek, SeekFrom, Write};
use std::vec::Vec;

use crate::error::{BinParse, BinParseResult};
use crate::wad::parser::{SPRITE_END, SPRITE_START};
use crate::wad::repr::{Entry, Head, HEAD_SIZE};
use crate::wad::store::{Category, LumpStore};

/// Write a complete WAD holding every lump of `store`.
///
/// Layout: header, plain lump data, sprite lump data (bracketed by
/// `S_START`/`S_END` when there are sprites), directory.  Within each group
/// lumps appear in lexicographic order of names.  The header is written
/// last, once the directory offset is known, so `writer` must be seekable.
pub fn write(
    store: &LumpStore,
    writer: &mut (impl Write + Seek),
) -> BinParseResult<()> {
    let start = writer.stream_position()?;
    writer.seek(SeekFrom::Start(start + HEAD_SIZE as u64))?;

    let mut directory = Vec::with_capacity(store.len() + 2);
    let mut offset = HEAD_SIZE;

    for lump in store.by_category(Category::Plain) {
        writer.write_all(lump.data())?;
        directory.push(entry(offset, lump.size(), lump.name())?);
        offset += lump.size();
    }

    let mut sprites = store.by_category(Category::Sprite).peekable();

    if sprites.peek().is_some() {
        directory.push(entry(offset, 0, SPRITE_START)?);

        for lump in sprites {
            writer.write_all(lump.data())?;
            directory.push(entry(offset, lump.size(), lump.name())?);
            offset += lump.size();
        }

        directory.push(entry(offset, 0, SPRITE_END)?);
    }

    write_directory(&directory, writer)?;

    let head =
        Head::new(store.kind(), to_i32(directory.len())?, to_i32(offset)?);
    writer.seek(SeekFrom::Start(start))?;
    head.write_to(writer)?;
    writer.flush()?;

    log::debug!(
        "Wrote {} directory entries, directory at offset {offset}",
        directory.len()
    );

    Ok(())
}

/// Serialize a store into an in-memory WAD.  Writing the result out in one
/// go avoids leaving a half-written file behind when serialization fails.
pub fn serialize(store: &LumpStore) -> BinParseResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write(store, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Emit directory records in exactly the given order
pub fn write_directory(
    entries: &[Entry],
    writer: &mut impl Write,
) -> BinParseResult<()> {
    for entry in entries {
        entry.write_to(writer)?;
    }

    Ok(())
}

fn entry(offset: usize, size: usize, name: &str) -> BinParseResult<Entry> {
    Entry::new(to_i32(offset)?, to_i32(size)?, name)
}

fn to_i32(value: usize) -> BinParseResult<i32> {
    i32::try_from(value).map_err(|_| {
        BinParse::Parse(format!("{value} does not fit in a WAD offset field"))
    })
}
