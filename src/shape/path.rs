use kurbo::Shape;

use crate::{
    color::rgba::Color,
    foundation::core::{BezPath, Canvas, Point},
    shape::Layers,
    source::ColorSource,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Foreground inside an arbitrary path.
pub struct PathMask {
    layers: Layers,
    path: BezPath,
    rule: FillRule,
}

impl PathMask {
    pub fn new<F, B>(fg: F, bg: B, path: BezPath, rule: FillRule) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            layers: Layers::new(fg, bg),
            path,
            rule,
        }
    }

    /// Polygon through `points`, closed.
    pub fn polygon<F, B>(fg: F, bg: B, points: &[Point], rule: FillRule) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        let mut path = BezPath::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
        }
        Self::new(fg, bg, path, rule)
    }

    pub fn contains(&self, p: Point) -> bool {
        let winding = self.path.winding(p);
        match self.rule {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

impl ColorSource for PathMask {
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
