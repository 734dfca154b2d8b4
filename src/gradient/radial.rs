use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point},
    gradient::stops::GradientStops,
    source::ColorSource,
};

/// Gradient by distance from `center`, normalized by `radius`.
#[derive(Clone, Debug)]
pub struct RadialGradient {
    canvas: Canvas,
    center: Point,
    radius: f64,
    stops: GradientStops,
}

impl RadialGradient {
    pub fn new(canvas: Canvas, center: Point, radius: f64, stops: GradientStops) -> Self {
        Self {
            canvas,
            center,
            radius,
            stops,
        }
    }
}

impl ColorSource for RadialGradient {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let t = Point::new(x, y).distance(self.center) / self.radius;
        self.stops.sample(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/radial.rs"]
mod tests;
