use std::f64::consts::PI;

/// Normalization applied to raw Perlin interpolation so values land roughly in `[-1, 1]`.
pub(crate) const PERLIN_NORMALIZE: f64 = 1.428;

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cosine smoothing of an interpolation fraction.
#[inline]
pub(crate) fn cos_smooth(t: f64) -> f64 {
    (1.0 - (t * PI).cos()) / 2.0
}

/// Quantizes `v` into `steps` bands, returning the band center.
#[inline]
pub fn granulate(v: f64, steps: f64) -> f64 {
    (v * steps).floor() / steps + 1.0 / (2.0 * steps)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
