#![forbid(unsafe_code)]

pub mod lump;
pub mod wad;

mod common;
mod error;

pub use common::{name_to_bytes, slice_to_string, NAME_LENGTH};
pub use error::{BinParse as BinParseError, BinParseResult};
pub use lump::{Image, Palette, Sound};
pub use wad::{Category, Lump, LumpStore, WadKind};
