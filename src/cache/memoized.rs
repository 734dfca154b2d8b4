use std::sync::OnceLock;

use crate::{
    color::rgba::Color,
    foundation::core::Canvas,
    source::{BoxedSource, ColorSource},
};

/// Lazily filled per-pixel cache in front of an expensive child.
///
/// Coordinates are floored to the containing pixel, so the child is evaluated at
/// most once per integer pixel.
pub struct Memoized {
    child: BoxedSource,
    cells: Vec<OnceLock<Color>>,
}

impl Memoized {
    pub fn new<S: ColorSource + 'static>(child: S) -> Self {
        let cells = (0..child.canvas().pixel_count())
            .map(|_| OnceLock::new())
            .collect();
        Self {
            child: Box::new(child),
            cells,
        }
    }

    /// Number of pixels evaluated so far.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.get().is_some()).count()
    }
}

impl ColorSource for Memoized {
    fn canvas(&self) -> Canvas {
        self.child.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let (px, py) = (x.floor(), y.floor());
        match self.cells.get(self.canvas().index_of(px, py)) {
            Some(cell) => *cell.get_or_init(|| self.child.get_color(px, py)),
            None => self.child.get_color(px, py),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/memoized.rs"]
mod tests;
