use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point, Vec2},
    shape::Layers,
    source::ColorSource,
};

/// Foreground where `((x-cx)/rx)^2 + ((y-cy)/ry)^2 <= 1`.
pub struct EllipseMask {
    layers: Layers,
    center: Point,
    radii: Vec2,
}

impl EllipseMask {
    pub fn new<F, B>(fg: F, bg: B, center: Point, radii: Vec2) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            layers: Layers::new(fg, bg),
            center,
            radii,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        let nx = (p.x - self.center.x) / self.radii.x;
        let ny = (p.y - self.center.y) / self.radii.y;
        nx * nx + ny * ny <= 1.0
    }
}

impl ColorSource for EllipseMask {
    fn canvas(&self) -> Canvas {
        self.layers.fg.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        if self.contains(Point::new(x, y)) {
            self.layers.fg.get_color(x, y)
        } else {
            self.layers.bg.get_color(x, y)
        }
    }
}
