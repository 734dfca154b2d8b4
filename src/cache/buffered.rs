use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Vec2},
    source::ColorSource,
};

/// Eager bake of a child source into a flat `width * y + x` buffer.
///
/// The child is only read during construction; reads are O(1) nearest-pixel lookups.
pub struct Buffered {
    canvas: Canvas,
    pixels: Vec<Color>,
}

impl Buffered {
    /// Bakes `child` at its own resolution.
    pub fn new<S: ColorSource + ?Sized>(child: &S) -> Self {
        Self::with_scale(child.canvas(), child, Vec2::new(1.0, 1.0))
    }

    /// Bakes a `canvas`-sized grid where pixel `(x, y)` holds
    /// `child.get_color(x * scale.x, y * scale.y)`.
    #[tracing::instrument(skip(child), fields(child_width = child.width(), child_height = child.height()))]
    pub fn with_scale<S: ColorSource + ?Sized>(canvas: Canvas, child: &S, scale: Vec2) -> Self {
        let mut pixels = Vec::with_capacity(canvas.pixel_count());
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                pixels.push(child.get_color(f64::from(x) * scale.x, f64::from(y) * scale.y));
            }
        }
        tracing::debug!(pixels = pixels.len(), "buffered source baked");
        Self { canvas, pixels }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl ColorSource for Buffered {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        self.pixels
            .get(self.canvas.index_of(x, y))
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/buffered.rs"]
mod tests;
