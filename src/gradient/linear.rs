use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point},
    gradient::stops::GradientStops,
    source::ColorSource,
};

/// Gradient along the axis `start -> end`, by scalar projection.
#[derive(Clone, Debug)]
pub struct LinearGradient {
    canvas: Canvas,
    start: Point,
    end: Point,
    stops: GradientStops,
}

impl LinearGradient {
    pub fn new(canvas: Canvas, start: Point, end: Point, stops: GradientStops) -> Self {
        Self {
            canvas,
            start,
            end,
            stops,
        }
    }

    /// Projection of `p` onto the axis; 0 at `start`, 1 at `end`.
    ///
    /// A zero-length axis yields NaN.
    pub fn position(&self, p: Point) -> f64 {
        let axis = self.end - self.start;
        (p - self.start).dot(axis) / axis.hypot2()
    }
}

impl ColorSource for LinearGradient {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.stops.sample(self.position(Point::new(x, y)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/linear.rs"]
mod tests;
