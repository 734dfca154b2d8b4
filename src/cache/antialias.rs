use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    source::{BoxedSource, ColorSource},
};

/// Fixed 2x2 supersample: `(x,y)`, `(x+.5,y)`, `(x,y+.5)`, `(x+.5,y+.5)`.
pub(crate) fn antialiased_color<S: ColorSource + ?Sized>(source: &S, x: f64, y: f64) -> Color {
    let top = source
        .get_color(x, y)
        .lerp(source.get_color(x + 0.5, y), 0.5);
    let bottom = source
        .get_color(x, y + 0.5)
        .lerp(source.get_color(x + 0.5, y + 0.5), 0.5);
    top.lerp(bottom, 0.5)
}

/// Supersampling wrapper around a child source.
pub struct Antialias {
    child: BoxedSource,
}

impl Antialias {
    pub fn new<S: ColorSource + 'static>(child: S) -> Self {
        Self {
            child: Box::new(child),
        }
    }
}

impl ColorSource for Antialias {
    fn canvas(&self) -> Canvas {
        self.child.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        antialiased_color(&self.child, x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/antialias.rs"]
mod tests;
