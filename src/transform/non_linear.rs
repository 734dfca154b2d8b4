//! Radial and polar remapping nodes.

use std::f64::consts::{PI, TAU};

use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point},
    foundation::math::lerp,
    source::{BoxedSource, ColorSource},
};

/// Magnifies (`scale > 0`) or pinches (`scale < 0`) the child inside `radius`.
///
/// `|scale|` blends between identity (0) and the full arc curve (1). Outside the
/// radius the child is sampled unchanged.
pub struct Fisheye {
    child: BoxedSource,
    center: Point,
    radius: f64,
    scale: f64,
}

impl Fisheye {
    pub fn new<S: ColorSource + 'static>(child: S, center: Point, radius: f64, scale: f64) -> Self {
        Self {
            child: Box::new(child),
            center,
            radius,
            scale,
        }
    }

    /// Normalized source radius for a normalized output radius `r` in `[0, 1)`.
    pub fn remap(&self, r: f64) -> f64 {
        let curved = if self.scale >= 0.0 {
            1.0 - (1.0 - r * r).sqrt()
        } else {
            (2.0 * r - r * r).sqrt()
        };
        lerp(r, curved, self.scale.abs().min(1.0))
    }

    pub fn source_point(&self, p: Point) -> Point {
        let offset = p - self.center;
        let d = offset.hypot();
        if d >= self.radius || d == 0.0 {
            return p;
        }
        let r = self.remap(d / self.radius);
        self.center + offset / d * (r * self.radius)
    }
}

impl ColorSource for Fisheye {
    fn canvas(&self) -> Canvas {
        self.child.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let p = self.source_point(Point::new(x, y));
        self.child.get_color(p.x, p.y)
    }
}

/// Samples the child at `(angle * angle_coefficient, distance * distance_coefficient)`
/// measured from `center`, turning a horizontal strip into concentric bands.
pub struct Polar {
    canvas: Canvas,
    child: BoxedSource,
    center: Point,
    angle_coefficient: f64,
    distance_coefficient: f64,
}

impl Polar {
    pub fn new<S: ColorSource + 'static>(
        canvas: Canvas,
        child: S,
        center: Point,
        angle_coefficient: f64,
        distance_coefficient: f64,
    ) -> Self {
        Self {
            canvas,
            child: Box::new(child),
            center,
            angle_coefficient,
            distance_coefficient,
        }
    }

    /// One full revolution spans the child's width; one pixel of radius is one child row.
    pub fn unwrap<S: ColorSource + 'static>(canvas: Canvas, child: S, center: Point) -> Self {
        let angle_coefficient = f64::from(child.width()) / TAU;
        Self::new(canvas, child, center, angle_coefficient, 1.0)
    }

    pub fn source_point(&self, p: Point) -> Point {
        let offset = p - self.center;
        Point::new(
            (offset.y.atan2(offset.x) + PI) * self.angle_coefficient,
            offset.hypot() * self.distance_coefficient,
        )
    }
}

impl ColorSource for Polar {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let p = self.source_point(Point::new(x, y));
        self.child.get_color(p.x, p.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
