use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point, Vec2},
    noise::{
        DECORRELATE,
        perlin::{Palette, PerlinGrid},
    },
    source::ColorSource,
};

/// Ring layout for [`Circles`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rings {
    pub center: Point,
    /// Radial distance covered by one ring, in pixels.
    pub ring_width: f64,
    /// Rings drawn before fading to the base color.
    pub ring_count: f64,
    /// Center displacement in pixels.
    pub jitter: f64,
    /// Lattice scale of the jitter noise.
    pub scale: f64,
}

impl Rings {
    pub fn centered(canvas: Canvas, ring_width: f64, ring_count: f64) -> Self {
        Self {
            center: canvas.center(),
            ring_width,
            ring_count,
            jitter: 0.0,
            scale: 8.0,
        }
    }

    pub fn with_jitter(mut self, jitter: f64, scale: f64) -> Self {
        self.jitter = jitter;
        self.scale = scale;
        self
    }
}

/// Concentric rings, `|1 - 2 * (r mod 1)|`, around a noise-jittered center.
#[derive(Clone, Debug)]
pub struct Circles {
    canvas: Canvas,
    grid: PerlinGrid,
    palette: Palette,
    rings: Rings,
}

impl Circles {
    pub fn new(canvas: Canvas, palette: Palette, rings: Rings) -> Self {
        Self::with_rng(canvas, palette, rings, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        canvas: Canvas,
        palette: Palette,
        rings: Rings,
        rng: &mut R,
    ) -> Self {
        Self {
            canvas,
            grid: PerlinGrid::with_rng(canvas, rng),
            palette,
            rings,
        }
    }

    pub fn raw(&self, x: f64, y: f64) -> f64 {
        let rings = &self.rings;
        let (lx, ly) = (x / rings.scale, y / rings.scale);
        let jitter = Vec2::new(
            self.grid.noise(lx, ly),
            self.grid.noise(lx + DECORRELATE.x, ly + DECORRELATE.y),
        ) * rings.jitter;

        let r = Point::new(x, y).distance(rings.center + jitter) / rings.ring_width;
        let fold = (1.0 - 2.0 * r.rem_euclid(1.0)).abs();
        let fade = (r - rings.ring_count).clamp(0.0, 1.0);
        2.0 * fold * (1.0 - fade) - 1.0
    }
}

impl ColorSource for Circles {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}
