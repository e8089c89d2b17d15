use crate::error::{BinParse, BinParseResult};
use std::string::String;

mod ext_traits;

pub(crate) use ext_traits::LeBytesExt;

/// Length in bytes of the name field of a directory entry
pub const NAME_LENGTH: usize = 8;

/// Interpret a name field as a lump name: everything up to the first null
/// byte, upper-cased.  Bytes outside of ASCII are replaced.
pub fn slice_to_string(slice: &[u8]) -> String {
    let len = slice.iter().position(|&b| b == 0u8).unwrap_or(slice.len());

    slice[..len]
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                char::from(b.to_ascii_uppercase())
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect()
}

/// Encode a lump name into a null-padded name field.  Names must be 1 to 8
/// ASCII characters with no null bytes; the stored form is upper case.
pub fn name_to_bytes(name: &str) -> BinParseResult<[u8; NAME_LENGTH]> {
    let bytes = name.as_bytes();

    if bytes.is_empty()
        || bytes.len() > NAME_LENGTH
        || !bytes.iter().all(|&b| b.is_ascii() && b != 0u8)
    {
        return Err(BinParse::InvalidName(String::from(name)));
    }

    let mut field = [0u8; NAME_LENGTH];

    for (dst, src) in field.iter_mut().zip(bytes) {
        *dst = src.to_ascii_uppercase();
    }

    Ok(field)
}
