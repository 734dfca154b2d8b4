use std::f64::consts::PI;

use crate::{
    color::rgba::Color,
    foundation::core::{Canvas, Point},
    shape::Layers,
    source::ColorSource,
};

/// Staggered rows of rounded tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayout {
    pub horizontal_count: f64,
    pub vertical_count: f64,
    /// Height of the rounded tile edge, in rows.
    pub ridge: f64,
    /// Fraction of each row drawn as background grout.
    pub border: f64,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            horizontal_count: 8.0,
            vertical_count: 4.0,
            ridge: 0.3,
            border: 0.1,
        }
    }
}

/// Roof-tile pattern: foreground tiles shaded toward the background along each
/// row, background in the gaps.
pub struct RoofTiles {
    layers: Layers,
    layout: TileLayout,
}

impl RoofTiles {
    pub fn new<F, B>(fg: F, bg: B, layout: TileLayout) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            layers: Layers::new(fg, bg),
            layout,
        }
    }

    /// Fraction through the current tile row, after the ridge offset.
    pub fn row_fraction(&self, p: Point) -> f64 {
        let canvas = self.canvas();
        let tile_w = f64::from(canvas.width) / self.layout.horizontal_count;
        let tile_h = f64::from(canvas.height) / self.layout.vertical_count;

        let row = p.y / tile_h;
        let stagger = if row.floor().rem_euclid(2.0) == 1.0 { 0.5 } else { 0.0 };
        let u = p.x / tile_w + stagger;
        let ridge = (u.rem_euclid(1.0) * PI).sin() * self.layout.ridge;
        (row + ridge).rem_euclid(1.0)
    }
}

impl ColorSource for RoofTiles {
    fn canvas(&self) -> Canvas {
        self.layers.fg.canvas()
    }

    fn sample(&self, x: f64, y: f64) -> Color {
        let f = self.row_fraction(Point::new(x, y));
        let bg = self.layers.bg.get_color(x, y);
        if f < self.layout.border {
            return bg;
        }
        self.layers.fg.get_color(x, y).lerp(bg, f * 0.5)
    }
}
