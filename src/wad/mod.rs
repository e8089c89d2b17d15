mod parser;
mod repr;
mod store;
mod writer;

pub use parser::{
    is_level_marker, load, load_bytes, parse_directory, LoadOptions,
    MAP_LUMP_NAMES, SPRITE_END, SPRITE_START,
};

pub use repr::{
    Entry, Head, WadKind, ENTRY_SIZE, HEAD_SIZE, IWAD_MAGIC, PWAD_MAGIC,
};

pub use store::{Category, Lump, LumpStore};

pub use writer::{serialize, write, write_directory};


#[cfg(test)]
mod repr_test;

#[cfg(test)]
mod store_test;
