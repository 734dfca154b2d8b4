/// Distance function between a pixel and a feature point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
    /// `(sqrt|dx| + sqrt|dy|)^2`.
    Minkowski,
}

impl Metric {
    /// Distance from axis deltas, which must already be non-negative.
    #[inline]
    pub fn distance(self, dx: f64, dy: f64) -> f64 {
        match self {
            Self::Euclidean => dx.hypot(dy),
            Self::Manhattan => dx + dy,
            Self::Chebyshev => dx.max(dy),
            Self::Minkowski => {
                let s = dx.sqrt() + dy.sqrt();
                s * s
            }
        }
    }
}

/// Absolute axis delta on a ring of circumference `size`.
#[inline]
pub(crate) fn toroidal_delta(a: f64, b: f64, size: f64) -> f64 {
    let d = (a - b).abs();
    if d > size / 2.0 { size - d } else { d }
}

/// How the two nearest distances become a cell value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// `min1^2`.
    #[default]
    Cells,
    /// `min2 - min1`.
    Net,
    /// `min1 * min2`.
    Balls,
}

impl CellKind {
    #[inline]
    pub fn value(self, min1: f64, min2: f64) -> f64 {
        match self {
            Self::Cells => min1 * min1,
            Self::Net => min2 - min1,
            Self::Balls => min1 * min2,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cellular/metric.rs"]
mod tests;
