//! Affine transform nodes.

use crate::{
    color::rgba::Color,
    foundation::core::{Affine, Canvas, Point, Vec2},
    foundation::error::{TesseraError, TesseraResult},
    source::{BoxedSource, ColorSource},
};

/// Child sampled through the inverse of an affine map.
pub struct Transformed {
    child: BoxedSource,
    inverse: Affine,
}

impl Transformed {
    /// `forward` maps child space to output space; it must be invertible.
    pub fn affine<S: ColorSource + 'static>(child: S, forward: Affine) -> TesseraResult<Self> {
        let det = forward.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(TesseraError::validation(format!(
                "affine transform is not invertible (determinant {det})"
            )));
        }
        Ok(Self::from_inverse(child, forward.inverse()))
    }

    fn from_inverse<S: ColorSource + 'static>(child: S, inverse: Affine) -> Self {
        Self {
            child: Box::new(child),
            inverse,
        }
    }

    /// Moves the child by `offset`.
    pub fn translate<S: ColorSource + 'static>(child: S, offset: Vec2) -> Self {
        Self::from_inverse(child, Affine::translate(-offset))
    }

    /// Rotates the child by `angle` radians about `origin`.
    pub fn rotate<S: ColorSource + 'static>(child: S, origin: Point, angle: f64) -> Self {
        Self::from_inverse(child, Affine::rotate_about(-angle, origin))
    }

    /// Uniform scale about `origin`.
    pub fn scale<S: ColorSource + 'static>(
        child: S,
        origin: Point,
        factor: f64,
    ) -> TesseraResult<Self> {
        Self::scale_non_uniform(child, origin, Vec2::new(factor, factor))
    }

    /// Per-axis scale about `origin`; zero factors are rejected.
    pub fn scale_non_uniform<S: ColorSource + 'static>(
        child: S,
        origin: Point,
        factor: Vec2,
    ) -> TesseraResult<Self> {
        let about = origin.to_vec2();
        let forward = Affine::translate(about)
            * Affine::scale_non_uniform(factor.x, factor.y)
            * Affine::translate(-about);
        Self::affine(child, forward)
    }

    /// Where an output coordinate samples the child.
    pub fn source_point(&self, p: Point) -> Point {
        self.inverse * p
    }
}

impl ColorSource for Transformed {
    fn canvas(&self) -> Canvas {
        self.child.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let p = self.source_point(Point::new(x, y));
        self.child.get_color(p.x, p.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
