use std::sync::Arc;

use crate::{color::rgba::Color, foundation::core::Canvas, render::bitmap::Bitmap};

pub(crate) mod solid;

/// A pure function from 2D coordinates to a [`Color`], sampled toroidally.
///
/// Implementors only provide [`ColorSource::sample`], which receives
/// coordinates already wrapped into the canvas. Callers go through
/// [`ColorSource::get_color`].
pub trait ColorSource: Send + Sync {
    fn canvas(&self) -> Canvas;

    /// Evaluates the source at a coordinate inside `[0, width) x [0, height)`.
    fn sample(&self, x: f64, y: f64) -> Color;

    fn width(&self) -> u32 {
        self.canvas().width
    }

    fn height(&self) -> u32 {
        self.canvas().height
    }

    fn get_color(&self, x: f64, y: f64) -> Color {
        let (x, y) = self.canvas().wrap(x, y);
        self.sample(x, y)
    }

    /// Evaluates every integer pixel once into a new bitmap.
    fn generate_image(&self) -> Bitmap {
        crate::render::raster::rasterize_serial(self)
    }

    /// Writes the full image into `surface` with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside `surface` are skipped.
    fn generate_into(&self, surface: &mut Bitmap, x: i64, y: i64) {
        crate::render::raster::rasterize_into(self, surface, x, y);
    }
}

/// Owned child node of a color-source tree.
pub type BoxedSource = Box<dyn ColorSource>;

/// Boxing helper so builders can accept any concrete node.
pub trait IntoSource {
    fn boxed(self) -> BoxedSource;
}

impl<S: ColorSource + 'static> IntoSource for S {
    fn boxed(self) -> BoxedSource {
        Box::new(self)
    }
}

impl<S: ColorSource + ?Sized> ColorSource for Box<S> {
    fn canvas(&self) -> Canvas {
        (**self).canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        (**self).sample(x, y)
    }

    fn get_color(&self, x: f64, y: f64) -> Color {
        (**self).get_color(x, y)
    }
}

impl<S: ColorSource + ?Sized> ColorSource for Arc<S> {
    fn canvas(&self) -> Canvas {
        (**self).canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        (**self).sample(x, y)
    }

    fn get_color(&self, x: f64, y: f64) -> Color {
        (**self).get_color(x, y)
    }
}
