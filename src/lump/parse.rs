use crate::common::LeBytesExt;
use crate::error::{BinParse, BinParseResult};
use crate::lump::repr::PALETTE_COLORS;
use crate::lump::{Image, Palette, Sound};
use std::vec::Vec;

/// Value of a post's starting row which ends a column
pub const COLUMN_END: u8 = 0xff;

/// Size of the picture header: width, height, left and top offsets
pub const PICTURE_HEAD_SIZE: usize = 8;

/// Size of the sound header: format, sample rate, sample count
pub const SOUND_HEAD_SIZE: usize = 8;

/// Attempt to parse RGB triples into a palette.  The size must be a positive
/// multiple of 3; a trailing partial color is rejected.
pub fn parse_palette(bytes: &[u8]) -> BinParseResult<Palette> {
    if bytes.is_empty() || bytes.len() % 3 != 0 {
        return Err(BinParse::WrongSize(format!(
            "palette of {} bytes is not a positive multiple of 3",
            bytes.len()
        )));
    }

    if bytes.len() != PALETTE_COLORS * 3 {
        log::debug!("Unusual palette size of {} bytes", bytes.len());
    }

    let colors = bytes
        .chunks_exact(3)
        .map(|rgb| [rgb[0], rgb[1], rgb[2]])
        .collect::<Vec<_>>();

    Ok(Palette::from_colors(colors.into_boxed_slice()))
}

/// Attempt to parse a picture (sprite, patch, or other graphic) whose
/// columns are stored as runs of opaque pixels called posts.
///
/// Each column offset points, relative to the start of the lump, to a
/// sequence of posts: starting row, pixel count, an unused byte, the palette
/// indices, and another unused byte.  A starting row of 255 ends the column.
/// Rows not covered by any post stay transparent, and rows past the bottom
/// of the picture are clipped.
pub fn parse_picture(bytes: &[u8], palette: &Palette) -> BinParseResult<Image> {
    if bytes.len() < PICTURE_HEAD_SIZE {
        return Err(BinParse::WrongSize(format!(
            "picture of {} bytes is shorter than its header",
            bytes.len()
        )));
    }

    let out_of_bounds =
        |what: &str| BinParse::OutOfBounds(format!("{what} past end of lump"));

    let width = bytes.le_u16_at(0).ok_or_else(|| out_of_bounds("width"))?;
    let height = bytes.le_u16_at(2).ok_or_else(|| out_of_bounds("height"))?;
    let left = bytes.le_i16_at(4).ok_or_else(|| out_of_bounds("offset"))?;
    let top = bytes.le_i16_at(6).ok_or_else(|| out_of_bounds("offset"))?;

    if width == 0 || height == 0 {
        return Ok(Image::transparent(width, height, left, top));
    }

    let table_end = PICTURE_HEAD_SIZE + 4 * usize::from(width);

    if bytes.len() < table_end {
        return Err(out_of_bounds("column offset table"));
    }

    let mut image = Image::transparent(width, height, left, top);

    for column in 0..usize::from(width) {
        let offset_at = PICTURE_HEAD_SIZE + 4 * column;
        let mut pos = bytes
            .le_u32_at(offset_at)
            .and_then(|pos| usize::try_from(pos).ok())
            .ok_or_else(|| out_of_bounds("column offset table"))?;

        log::trace!("Column {column} starts at {pos}");

        loop {
            let row_start = bytes
                .byte_at(pos)
                .ok_or_else(|| out_of_bounds("post in column"))?;

            if row_start == COLUMN_END {
                break;
            }

            let length = pos
                .checked_add(1)
                .and_then(|at| bytes.byte_at(at))
                .ok_or_else(|| out_of_bounds("post length"))?;

            let pixels_start = pos
                .checked_add(3)
                .ok_or_else(|| out_of_bounds("post pixels"))?;
            let pixels_end = pixels_start
                .checked_add(usize::from(length))
                .ok_or_else(|| out_of_bounds("post pixels"))?;

            let indices = bytes
                .get(pixels_start..pixels_end)
                .ok_or_else(|| out_of_bounds("post pixels"))?;

            for (row, &index) in indices.iter().enumerate() {
                let y = usize::from(row_start) + row;

                if y >= usize::from(height) {
                    break;
                }

                let rgb = palette.color(index).ok_or_else(|| {
                    BinParse::OutOfBounds(format!(
                        "palette index {index} outside palette of {} colors",
                        palette.len()
                    ))
                })?;

                image.paint(column, y, rgb);
            }

            pos = pixels_end
                .checked_add(1)
                .ok_or_else(|| out_of_bounds("post in column"))?;
        }
    }

    Ok(image)
}

/// Attempt to parse a digitized sound: format, sample rate and sample count
/// followed by unsigned 8-bit mono samples
pub fn parse_sound(bytes: &[u8]) -> BinParseResult<Sound> {
    let wrong_size = || {
        BinParse::WrongSize(format!(
            "sound lump of {} bytes is too short",
            bytes.len()
        ))
    };

    let format = bytes.le_u16_at(0).ok_or_else(wrong_size)?;
    let sample_rate = bytes.le_u16_at(2).ok_or_else(wrong_size)?;
    let sample_count = bytes.le_u32_at(4).ok_or_else(wrong_size)?;

    let samples_end = usize::try_from(sample_count)
        .ok()
        .and_then(|count| SOUND_HEAD_SIZE.checked_add(count))
        .ok_or_else(wrong_size)?;

    let samples = bytes
        .get(SOUND_HEAD_SIZE..samples_end)
        .ok_or_else(wrong_size)?;

    Ok(Sound::from_parts(format, sample_rate, samples.to_vec()))
}
