use rand::Rng;

use crate::{
    cellular::metric::{CellKind, Metric, toroidal_delta},
    color::rgba::Color,
    foundation::core::{Canvas, Point},
    noise::perlin::Palette,
    source::ColorSource,
};

/// Per-pixel result of the distance bake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSample {
    /// Distance to the nearest feature point.
    pub min1: f64,
    /// Distance to the second nearest feature point.
    pub min2: f64,
    /// Cell value rescaled into `[0, 1]` over the whole grid.
    pub value: f64,
}

/// Worley noise over scattered feature points, baked for every pixel at construction.
///
/// Construction is O(width * height * points). Distances wrap around the canvas
/// edges so the texture tiles.
#[derive(Clone, Debug)]
pub struct CellularNoise {
    canvas: Canvas,
    palette: Palette,
    points: Vec<Point>,
    field: Vec<CellSample>,
}

impl CellularNoise {
    /// Scatters `max(2, width * height / density)` points.
    pub fn new(
        canvas: Canvas,
        palette: Palette,
        density: f64,
        metric: Metric,
        kind: CellKind,
    ) -> Self {
        Self::with_rng(canvas, palette, density, metric, kind, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        canvas: Canvas,
        palette: Palette,
        density: f64,
        metric: Metric,
        kind: CellKind,
        rng: &mut R,
    ) -> Self {
        let count = point_count(canvas, density);
        let points = (0..count)
            .map(|_| {
                Point::new(
                    f64::from(rng.random_range(0..canvas.width)),
                    f64::from(rng.random_range(0..canvas.height)),
                )
            })
            .collect();
        Self::from_points(canvas, palette, points, metric, kind)
    }

    /// Bakes the field for caller-provided feature points.
    #[tracing::instrument(skip(palette, points), fields(point_count = points.len()))]
    pub fn from_points(
        canvas: Canvas,
        palette: Palette,
        points: Vec<Point>,
        metric: Metric,
        kind: CellKind,
    ) -> Self {
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let mut field = Vec::with_capacity(canvas.pixel_count());
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;

        for py in 0..canvas.height {
            for px in 0..canvas.width {
                let (x, y) = (f64::from(px), f64::from(py));
                let mut min1 = f64::INFINITY;
                let mut min2 = f64::INFINITY;
                for p in &points {
                    let d = metric.distance(toroidal_delta(x, p.x, w), toroidal_delta(y, p.y, h));
                    if d < min1 {
                        min2 = min1;
                        min1 = d;
                    } else if d < min2 {
                        min2 = d;
                    }
                }
                let value = kind.value(min1, min2);
                lo = lo.min(value);
                hi = hi.max(value);
                field.push(CellSample { min1, min2, value });
            }
        }

        // A flat field divides by zero here; callers get NaN rather than a patched value.
        let range = hi - lo;
        for cell in &mut field {
            cell.value = (cell.value - lo) / range;
        }
        tracing::debug!(pixels = field.len(), lo, hi, "cellular field baked");

        Self {
            canvas,
            palette,
            points,
            field,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Baked sample for the pixel containing `(x, y)`, wrapped.
    pub fn cell(&self, x: f64, y: f64) -> CellSample {
        let (x, y) = self.canvas.wrap(x, y);
        self.field
            .get(self.canvas.index_of(x, y))
            .copied()
            .unwrap_or(CellSample {
                min1: f64::NAN,
                min2: f64::NAN,
                value: f64::NAN,
            })
    }

    /// Nearest and second-nearest distances at `(x, y)`.
    pub fn distances(&self, x: f64, y: f64) -> (f64, f64) {
        let c = self.cell(x, y);
        (c.min1, c.min2)
    }

    /// Normalized value in `[0, 1]` at `(x, y)`.
    pub fn value(&self, x: f64, y: f64) -> f64 {
        self.cell(x, y).value
    }
}

fn point_count(canvas: Canvas, density: f64) -> usize {
    let n = (canvas.pixel_count() as f64 / density).floor();
    // Zero, negative or NaN densities fall back to the minimum.
    if n.is_finite() && n > 2.0 { n as usize } else { 2 }
}

impl ColorSource for CellularNoise {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.palette.shade_unit(self.cell(x, y).value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cellular/worley.rs"]
mod tests;
