use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point},
    shape::Layers,
    source::ColorSource,
};

/// Disc with a one pixel soft edge centered on `radius`.
pub struct CircleMask {
    layers: Layers,
    center: Point,
    radius: f64,
}

impl CircleMask {
    pub fn new<F, B>(fg: F, bg: B, center: Point, radius: f64) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            layers: Layers::new(fg, bg),
            center,
            radius,
        }
    }

    /// 0 well inside, 1 well outside, linear across `[radius - 0.5, radius + 0.5]`.
    pub fn coverage(&self, p: Point) -> f64 {
        (p.distance(self.center) - self.radius + 0.5).clamp(0.0, 1.0)
    }
}

impl ColorSource for CircleMask {
    fn canvas(&self) -> Canvas {
        self.layers.fg.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let t = self.coverage(Point::new(x, y));
        if t <= 0.0 {
            return self.layers.fg.get_color(x, y);
        }
        if t >= 1.0 {
            return self.layers.bg.get_color(x, y);
        }
        self.layers
            .fg
            .get_color(x, y)
            .lerp(self.layers.bg.get_color(x, y), t)
    }
}
