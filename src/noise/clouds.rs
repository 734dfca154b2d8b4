use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    noise::perlin::{Palette, PerlinGrid},
    source::ColorSource,
};

const OCTAVES: u32 = 6;

/// Six-octave fBm: octave `i` runs at `scale / 2^i` with weight `0.5^(i+1)`.
#[derive(Clone, Debug)]
pub struct Clouds {
    canvas: Canvas,
    grid: PerlinGrid,
    palette: Palette,
    scale: f64,
}

impl Clouds {
    pub fn new(canvas: Canvas, palette: Palette, scale: f64) -> Self {
        Self::with_rng(canvas, palette, scale, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        canvas: Canvas,
        palette: Palette,
        scale: f64,
        rng: &mut R,
    ) -> Self {
        Self {
            canvas,
            grid: PerlinGrid::with_rng(canvas, rng),
            palette,
            scale,
        }
    }

    pub fn raw(&self, x: f64, y: f64) -> f64 {
        self.grid.fbm(x / self.scale, y / self.scale, OCTAVES)
    }
}

impl ColorSource for Clouds {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}
