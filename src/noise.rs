pub(crate) mod bark;
pub(crate) mod camouflage;
pub(crate) mod circles;
pub(crate) mod clouds;
pub(crate) mod curve;
pub(crate) mod frosted;
pub(crate) mod glass;
pub(crate) mod perlin;
pub(crate) mod velvet;

use crate::foundation::core::Vec2;

/// Lattice shift used to draw a second, decorrelated sample from the same grid.
pub(crate) const DECORRELATE: Vec2 = Vec2::new(5.2, 1.3);

#[cfg(test)]
#[path = "../tests/unit/noise/generators.rs"]
mod tests;
