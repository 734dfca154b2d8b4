use std::f64::consts::TAU;

use rand::Rng;

use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Vec2},
    foundation::math::{PERLIN_NORMALIZE, cos_smooth, lerp},
    noise::curve::Curve,
    source::ColorSource,
};

/// Grid of random unit gradient vectors, indexed toroidally.
#[derive(Clone, Debug)]
pub struct PerlinGrid {
    width: usize,
    height: usize,
    vectors: Vec<Vec2>,
}

impl PerlinGrid {
    pub fn new(canvas: Canvas) -> Self {
        Self::with_rng(canvas, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Self {
        let vectors = (0..canvas.pixel_count())
            .map(|_| Vec2::from_angle(rng.random::<f64>() * TAU))
            .collect();
        Self {
            width: canvas.width.max(1) as usize,
            height: canvas.height.max(1) as usize,
            vectors,
        }
    }

    #[inline]
    fn gradient(&self, ix: i64, iy: i64) -> Vec2 {
        let gx = ix.rem_euclid(self.width as i64) as usize;
        let gy = iy.rem_euclid(self.height as i64) as usize;
        self.vectors
            .get(gy * self.width + gx)
            .copied()
            .unwrap_or(Vec2::ZERO)
    }

    /// Gradient noise at lattice coordinates `(x, y)`, roughly in `[-1, 1]`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        let (x0, y0) = (x.floor(), y.floor());
        let (fx, fy) = (x - x0, y - y0);
        let (ix, iy) = (x0 as i64, y0 as i64);

        let d00 = self.gradient(ix, iy).dot(Vec2::new(fx, fy));
        let d10 = self.gradient(ix + 1, iy).dot(Vec2::new(fx - 1.0, fy));
        let d01 = self.gradient(ix, iy + 1).dot(Vec2::new(fx, fy - 1.0));
        let d11 = self.gradient(ix + 1, iy + 1).dot(Vec2::new(fx - 1.0, fy - 1.0));

        let sx = cos_smooth(fx);
        let sy = cos_smooth(fy);
        let top = lerp(d00, d10, sx);
        let bottom = lerp(d01, d11, sx);
        lerp(top, bottom, sy) * PERLIN_NORMALIZE
    }

    /// `octaves` layers, each at double the frequency and half the weight of the
    /// previous one, starting at weight 0.5.
    pub fn fbm(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut sum = 0.0;
        let mut freq = 1.0;
        let mut weight = 0.5;
        for _ in 0..octaves {
            sum += self.noise(x * freq, y * freq) * weight;
            freq *= 2.0;
            weight *= 0.5;
        }
        sum
    }
}

/// Endpoint colors plus the remap shared by every noise generator.
#[derive(Clone, Debug)]
pub struct Palette {
    pub base: Color,
    pub second: Color,
    pub curve: Curve,
}

impl Palette {
    pub fn new(base: Color, second: Color) -> Self {
        Self {
            base,
            second,
            curve: Curve::Identity,
        }
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// `base.lerp(second, curve(raw / 2 + 0.5))` for a raw value in roughly `[-1, 1]`.
    #[inline]
    pub fn shade(&self, raw: f64) -> Color {
        self.shade_unit(raw / 2.0 + 0.5)
    }

    /// `base.lerp(second, curve(t))` for `t` already in `[0, 1]`.
    #[inline]
    pub fn shade_unit(&self, t: f64) -> Color {
        self.base.lerp(self.second, self.curve.apply(t))
    }
}

/// Single-octave gradient noise.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    canvas: Canvas,
    grid: PerlinGrid,
    palette: Palette,
    scale: f64,
}

impl PerlinNoise {
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
        self.grid.noise(x / self.scale, y / self.scale)
    }
}

impl ColorSource for PerlinNoise {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade(self.raw(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/perlin.rs"]
mod tests;
