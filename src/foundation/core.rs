pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Toroidal sampling domain of a color source.
///
/// Both dimensions are whole pixels and never smaller than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Floors and clamps both dimensions to `>= 1`.
    pub fn new(width: f64, height: f64) -> Self {
        fn dim(v: f64) -> u32 {
            // `f64::max` drops NaN, so a NaN dimension also becomes 1.
            v.floor().max(1.0).min(f64::from(u32::MAX)) as u32
        }

        Self {
            width: dim(width),
            height: dim(height),
        }
    }

    pub fn square(size: u32) -> Self {
        Self::new(f64::from(size), f64::from(size))
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Wraps `(x, y)` into `[0, width) x [0, height)`.
    pub fn wrap(self, x: f64, y: f64) -> (f64, f64) {
        (
            wrap(x, 0.0, f64::from(self.width)),
            wrap(y, 0.0, f64::from(self.height)),
        )
    }

    /// Flat buffer index of the pixel containing an already wrapped coordinate.
    pub(crate) fn index_of(self, x: f64, y: f64) -> usize {
        // Wrapping a tiny negative value can round up to exactly `width`.
        let last_x = (self.width as usize).saturating_sub(1);
        let last_y = (self.height as usize).saturating_sub(1);
        let px = (x.floor().max(0.0) as usize).min(last_x);
        let py = (y.floor().max(0.0) as usize).min(last_y);
        self.width as usize * py + px
    }
}

/// `((v - min) mod range + range) mod range + min`.
pub fn wrap(v: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    ((v - min) % range + range) % range + min
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
