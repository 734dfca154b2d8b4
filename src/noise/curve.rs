use std::sync::Arc;

use crate::foundation::math::cos_smooth;

/// Remap applied to a normalized noise value before the final color lerp.
#[derive(Clone, Default)]
pub enum Curve {
    #[default]
    Identity,
    /// Cosine ease-in-out.
    Ease,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// Hard banding into `n` levels.
    Steps(u32),
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Ease => f.write_str("Ease"),
            Self::InQuad => f.write_str("InQuad"),
            Self::OutQuad => f.write_str("OutQuad"),
            Self::InOutQuad => f.write_str("InOutQuad"),
            Self::InCubic => f.write_str("InCubic"),
            Self::OutCubic => f.write_str("OutCubic"),
            Self::InOutCubic => f.write_str("InOutCubic"),
            Self::Steps(n) => f.debug_tuple("Steps").field(n).finish(),
            Self::Custom(func) => f
                .debug_tuple("Custom")
                .field(&Arc::as_ptr(func))
                .finish(),
        }
    }
}

impl Curve {
    pub fn custom(func: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(func))
    }

    /// `Identity` and `Custom` pass `t` through untouched; the others clamp to `[0, 1]` first.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Identity => t,
            Self::Custom(func) => func(t),
            _ => self.apply_clamped(t.clamp(0.0, 1.0)),
        }
    }

    fn apply_clamped(&self, t: f64) -> f64 {
        match self {
            Self::Ease => cos_smooth(t),
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Steps(n) => {
                let n = f64::from((*n).max(1));
                (t * n).floor().min(n - 1.0) / (n - 1.0).max(1.0)
            }
            Self::Identity | Self::Custom(_) => t,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/curve.rs"]
mod tests;
