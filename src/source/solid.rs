use crate::{color::rgba::Color, foundation::core::Canvas, source::ColorSource};

/// Constant color everywhere on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solid {
    canvas: Canvas,
    color: Color,
}

impl Solid {
    pub fn new(canvas: Canvas, color: Color) -> Self {
        Self { canvas, color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl ColorSource for Solid {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, _x: f64, _y: f64) -> Color {
        self.color
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/solid.rs"]
mod tests;
