use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{RibbonError, RibbonResult};

/// Straight RGB8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> RibbonResult<Self> {
        crate::color::hex::parse_hex(s)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn to_f32(self) -> [f32; 3] {
        [f32::from(self.r), f32::from(self.g), f32::from(self.b)]
    }
}

/// Ordered gradient stops. Order is significant; stops are never mutated by a render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorStops(Vec<Rgb8>);

impl ColorStops {
    /// Wrap an ordered list of colors.
    pub fn new(stops: Vec<Rgb8>) -> Self {
        Self(stops)
    }

    /// Parse every entry as a hex color, failing on the first malformed one.
    pub fn from_hex<I, S>(items: I) -> RibbonResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|s| Rgb8::from_hex(s.as_ref()))
            .collect::<RibbonResult<Vec<_>>>()
            .map(Self)
    }

    /// Borrow the stops in order.
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.0
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no stops at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Rgb8>> for ColorStops {
    fn from(v: Vec<Rgb8>) -> Self {
        Self(v)
    }
}

/// Output pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas; zero dimensions are allowed and mean "nothing to render".
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Length in bytes of an RGBA8 buffer of this size.
    pub fn rgba_len(self) -> RibbonResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| RibbonError::validation("canvas buffer size overflow"))
    }
}

/// A rendered frame: row-major RGBA8, origin top-left, fully opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Allocate an opaque black frame.
    pub fn new_opaque(canvas: Canvas) -> RibbonResult<Self> {
        let len = canvas.rgba_len()?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Dimensions of this frame.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Read one pixel. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Resize with a triangle filter. Used as the degraded export path.
    pub fn rescaled(&self, width: u32, height: u32) -> RibbonResult<Self> {
        if width == 0 || height == 0 {
            return Err(RibbonError::validation("rescale target must be non-empty"));
        }
        let img = self.to_image()?;
        let out = image::imageops::resize(&img, width, height, image::imageops::FilterType::Triangle);
        let mut data = out.into_raw();
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> RibbonResult<Vec<u8>> {
        let img = self.to_image()?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .context("encode png")?;
        Ok(out.into_inner())
    }

    /// Write a PNG file, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> RibbonResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn to_image(&self) -> RibbonResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| RibbonError::render("frame data does not match width*height*4"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
