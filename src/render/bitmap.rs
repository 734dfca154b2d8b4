use std::path::Path;

use anyhow::Context;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    foundation::error::{TesseraError, TesseraResult},
    source::ColorSource,
};

/// Rasterized color source: row-major straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Fully transparent bitmap. Dimensions are clamped to `>= 1`.
    pub fn new(width: u32, height: u32) -> Self {
        let canvas = Canvas::new(f64::from(width), f64::from(height));
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.pixel_count() * 4],
        }
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> TesseraResult<Self> {
        if width == 0 || height == 0 {
            return Err(TesseraError::validation("bitmap dimensions must be > 0"));
        }
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(TesseraError::validation(format!(
                "bitmap {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| ((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let i = self.offset(x, y)?;
        let px = self.data.get(i..i + 4)?;
        Some(Color::from_rgba8(px[0], px[1], px[2], px[3]))
    }

    /// Returns `false` when `(x, y)` is outside the bitmap.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        let Some(i) = self.offset(x, y) else {
            return false;
        };
        match self.data.get_mut(i..i + 4) {
            Some(px) => {
                px.copy_from_slice(&color.to_rgba8());
                true
            }
            None => false,
        }
    }

    /// Premultiplied copy of the pixel data, for hosts that blit premultiplied surfaces.
    pub fn to_premul_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&Color::from_rgba8(px[0], px[1], px[2], px[3]).to_premul_rgba8());
        }
        out
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    pub fn from_image(img: &image::DynamicImage) -> TesseraResult<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_raw(width, height, rgba.into_raw())
    }

    /// Decode encoded image bytes (PNG).
    pub fn decode(bytes: &[u8]) -> TesseraResult<Self> {
        let img = image::load_from_memory(bytes).context("decode image from memory")?;
        Self::from_image(&img)
    }

    pub fn encode_png(&self) -> TesseraResult<Vec<u8>> {
        let mut out = std::io::Cursor::new(Vec::new());
        self.to_image()
            .write_to(&mut out, image::ImageFormat::Png)
            .context("encode png")?;
        Ok(out.into_inner())
    }

    pub fn save_png(&self, path: &Path) -> TesseraResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
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

    pub fn load_png(path: &Path) -> TesseraResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read png '{}'", path.display()))?;
        Self::decode(&bytes)
    }
}

/// A bitmap samples as nearest pixel, so baked trees can feed further nodes.
impl ColorSource for Bitmap {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let i = self.canvas().index_of(x, y) * 4;
        match self.data.get(i..i + 4) {
            Some(px) => Color::from_rgba8(px[0], px[1], px[2], px[3]),
            None => Color::TRANSPARENT,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
