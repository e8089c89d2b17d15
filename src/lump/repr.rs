use std::boxed::Box;
use std::time::Duration;
use std::vec::Vec;

/// Number of colors a picture can index
pub const PALETTE_COLORS: usize = 256;

/// Ordered RGB colors.  Only the first 256 can be referenced by pictures;
/// `PLAYPAL` holds several palettes back to back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    colors: Box<[[u8; 3]]>,
}

impl Palette {
    pub(crate) fn from_colors(colors: Box<[[u8; 3]]>) -> Self {
        Palette { colors }
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors[..]
    }

    pub fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(usize::from(index)).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Render the indexable colors as a single opaque row of pixels
    pub fn to_image(&self) -> Image {
        let shown = &self.colors[..self.colors.len().min(PALETTE_COLORS)];
        let mut image = Image::transparent(shown.len() as u16, 1, 0, 0);

        for (x, &rgb) in shown.iter().enumerate() {
            image.paint(x, 0, rgb);
        }

        image
    }
}

/// RGBA raster, rows top to bottom, 4 bytes per pixel
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Image {
    width: u16,
    height: u16,
    left_offset: i16,
    top_offset: i16,
    pixels: Box<[u8]>,
}

impl Image {
    pub(crate) fn transparent(
        width: u16,
        height: u16,
        left_offset: i16,
        top_offset: i16,
    ) -> Self {
        let len = usize::from(width) * usize::from(height) * 4;

        Image {
            width,
            height,
            left_offset,
            top_offset,
            pixels: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Set the pixel at `(x, y)` to an opaque color
    pub(crate) fn paint(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let at = (y * usize::from(self.width) + x) * 4;
        self.pixels[at..at + 3].copy_from_slice(&rgb);
        self.pixels[at + 3] = u8::MAX;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Horizontal distance from the picture's origin to its left edge
    pub fn left_offset(&self) -> i16 {
        self.left_offset
    }

    /// Vertical distance from the picture's origin to its top edge
    pub fn top_offset(&self) -> i16 {
        self.top_offset
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels[..]
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the image
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let (x, y) = (usize::from(x), usize::from(y));
        let at = (y * usize::from(self.width) + x) * 4;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[at..at + 4]);
        Some(rgba)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Mono 8-bit unsigned PCM sample
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sound {
    format: u16,
    sample_rate: u16,
    samples: Box<[u8]>,
}

impl Sound {
    pub(crate) fn from_parts(
        format: u16,
        sample_rate: u16,
        samples: Vec<u8>,
    ) -> Self {
        Sound {
            format,
            sample_rate,
            samples: samples.into_boxed_slice(),
        }
    }

    /// Format tag from the lump header, 3 for raw PCM
    pub fn format(&self) -> u16 {
        self.format
    }

    pub fn sample_rate(&self) -> u16 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        1
    }

    pub fn bits_per_sample(&self) -> u16 {
        8
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples[..]
    }

    /// Playback length; zero when the sample rate is zero
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }

        let samples = self.samples.len() as u64;
        let rate = u64::from(self.sample_rate);
        Duration::from_secs(samples / rate)
            + Duration::from_nanos((samples % rate) * 1_000_000_000 / rate)
    }
}
