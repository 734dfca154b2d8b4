use std::f64::consts::PI;

use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    noise::perlin::{Palette, PerlinGrid},
    source::ColorSource,
};

/// Noise sampled through a swirl: a coarser octave picks an angle and the
/// sample point is pushed `turbulence` pixels along it.
#[derive(Clone, Debug)]
pub struct Glass {
    canvas: Canvas,
    grid: PerlinGrid,
    warp: PerlinGrid,
    palette: Palette,
    scale: f64,
    turbulence: f64,
}

impl Glass {
    pub fn new(canvas: Canvas, palette: Palette, scale: f64, turbulence: f64) -> Self {
        Self::with_rng(canvas, palette, scale, turbulence, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        canvas: Canvas,
        palette: Palette,
        scale: f64,
        turbulence: f64,
        rng: &mut R,
    ) -> Self {
        Self {
            canvas,
            grid: PerlinGrid::with_rng(canvas, rng),
            warp: PerlinGrid::with_rng(canvas, rng),
            palette,
            scale,
            turbulence,
        }
    }

    pub fn raw(&self, x: f64, y: f64) -> f64 {
        let coarse = self.scale * 2.0;
        let angle = self.warp.noise(x / coarse, y / coarse) * PI;
        let wx = x + angle.cos() * self.turbulence;
        let wy = y + angle.sin() * self.turbulence;
        self.grid.noise(wx / self.scale, wy / self.scale)
    }
}

impl ColorSource for Glass {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}
