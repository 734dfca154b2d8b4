use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    foundation::math::granulate,
    noise::perlin::{Palette, PerlinGrid},
    source::ColorSource,
};

/// Vertical wood grain: noise stretched along y, wobbled along x by fBm, then banded.
#[derive(Clone, Debug)]
pub struct Bark {
    canvas: Canvas,
    grid: PerlinGrid,
    warp: PerlinGrid,
    palette: Palette,
    scale: f64,
    /// Wobble strength in lattice cells.
    turbulence: f64,
    steps: f64,
}

impl Bark {
    pub fn new(canvas: Canvas, palette: Palette, scale: f64, turbulence: f64, steps: f64) -> Self {
        Self::with_rng(canvas, palette, scale, turbulence, steps, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        canvas: Canvas,
        palette: Palette,
        scale: f64,
        turbulence: f64,
        steps: f64,
        rng: &mut R,
    ) -> Self {
        Self {
            canvas,
            grid: PerlinGrid::with_rng(canvas, rng),
            warp: PerlinGrid::with_rng(canvas, rng),
            palette,
            scale,
            turbulence,
            steps,
        }
    }

    pub fn raw(&self, x: f64, y: f64) -> f64 {
        let d = self.warp.fbm(x / self.scale, y / self.scale, 3);
        let v = self.grid.noise(
            x / (self.scale / 4.0) + d * self.turbulence,
            y / (self.scale * 4.0),
        );
        granulate(v, self.steps)
    }
}

impl ColorSource for Bark {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}
