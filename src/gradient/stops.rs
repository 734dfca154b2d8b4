use crate::color::rgba::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// Color stops kept sorted ascending by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradientStops {
    stops: Vec<GradientStop>,
}

impl GradientStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stop list from `(position, color)` pairs in any order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, Color)>) -> Self {
        let mut out = Self::new();
        for (position, color) in pairs {
            out.insert(position, color);
        }
        out
    }

    /// Inserts after any existing stop at the same position.
    pub fn insert(&mut self, position: f64, color: Color) -> &mut Self {
        let at = self.stops.partition_point(|s| s.position <= position);
        self.stops.insert(at, GradientStop { position, color });
        self
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Interpolates between the two stops bracketing `t`, clamping to the end stops.
    pub fn sample(&self, t: f64) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t >= lo.position && t < hi.position {
                let f = (t - lo.position) / (hi.position - lo.position);
                return lo.color.lerp(hi.color, f);
            }
        }
        // Only reachable for NaN, which no stop brackets.
        first.color.lerp(last.color, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/stops.rs"]
mod tests;
