use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    foundation::math::granulate,
    noise::{
        DECORRELATE,
        perlin::{Palette, PerlinGrid},
    },
    source::ColorSource,
};

/// Fine grain seen through a three-octave distortion, banded into `steps` levels.
#[derive(Clone, Debug)]
pub struct FrostedGlass {
    canvas: Canvas,
    grid: PerlinGrid,
    warp: PerlinGrid,
    palette: Palette,
    scale: f64,
    /// Distortion strength in pixels.
    turbulence: f64,
    steps: f64,
}

impl FrostedGlass {
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
        let (lx, ly) = (x / self.scale, y / self.scale);
        let dx = self.warp.fbm(lx, ly, 3);
        let dy = self.warp.fbm(lx + DECORRELATE.x, ly + DECORRELATE.y, 3);

        let fine = self.scale / 4.0;
        let v = self.grid.noise(
            (x + dx * self.turbulence) / fine,
            (y + dy * self.turbulence) / fine,
        );
        granulate(v, self.steps)
    }
}

impl ColorSource for FrostedGlass {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}
