use std::io;
use std::string::String;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinParse {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("magic number {0:?} is neither `IWAD` nor `PWAD`")]
    InvalidMagic([u8; 4]),

    #[error("malformed directory: {0}")]
    MalformedDirectory(String),

    #[error(
        "lump `{name}` ({size} bytes at offset {offset}) runs past the end \
         of the source ({available} bytes)"
    )]
    TruncatedData {
        name: String,
        offset: u64,
        size: u64,
        available: u64,
    },

    #[error("wrong size: {0}")]
    WrongSize(String),

    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    #[error("invalid lump name `{0}`")]
    InvalidName(String),

    #[error("{0}")]
    Parse(String),
}

pub type BinParseResult<T> = Result<T, BinParse>;
