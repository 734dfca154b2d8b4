use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    noise::perlin::{Palette, PerlinGrid},
    source::ColorSource,
};

/// Domain-warped noise: one octave offsets the lattice point fed into the next.
#[derive(Clone, Debug)]
pub struct Velvet {
    canvas: Canvas,
    grid: PerlinGrid,
    palette: Palette,
    scale: f64,
}

impl Velvet {
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
        let (lx, ly) = (x / self.scale, y / self.scale);
        let warp = self.grid.noise(lx, ly);
        self.grid.noise(lx * 2.0 + warp, ly * 2.0 + warp)
    }
}

impl ColorSource for Velvet {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}
