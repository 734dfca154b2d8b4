//! Foreground/background selection by geometric membership.

pub(crate) mod circle;
pub(crate) mod ellipse;
pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod roof_tiles;

use crate::source::{BoxedSource, ColorSource};

/// The two children every mask picks between. The canvas is the foreground's.
pub(crate) struct Layers {
    pub(crate) fg: BoxedSource,
    pub(crate) bg: BoxedSource,
}

impl Layers {
    pub(crate) fn new<F, B>(fg: F, bg: B) -> Self
    where
        F: ColorSource + 'static,
        B: ColorSource + 'static,
    {
        Self {
            fg: Box::new(fg),
            bg: Box::new(bg),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/shape/masks.rs"]
mod tests;
