mod parse;
mod repr;

pub use parse::{
    parse_palette, parse_picture, parse_sound, COLUMN_END, PICTURE_HEAD_SIZE,
    SOUND_HEAD_SIZE,
};

pub use repr::{Image, Palette, Sound, PALETTE_COLORS};
