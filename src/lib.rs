//! Tessera builds textures from trees of procedural color sources.
//!
//! A [`ColorSource`] is a pure function from 2D coordinates to a [`Color`],
//! sampled toroidally over its [`Canvas`]. Leaves generate (Perlin and Worley
//! noise, gradients, solids); inner nodes composite, mask, transform or cache
//! their children. Any tree can be rasterized into a [`Bitmap`]:
//!
//! - Build a tree from the node constructors or a [`Recipe`]
//! - [`rasterize`] it with [`RenderSettings`]
//! - Keep baked results in an [`AssetRegistry`], optionally backed by a [`BitmapStore`]
#![forbid(unsafe_code)]

mod assets;
mod cache;
mod cellular;
mod color;
mod composite;
mod foundation;
mod gradient;
mod noise;
mod render;
mod shape;
mod source;

/// Ready-made trees for common game textures.
pub mod recipes;
/// Coordinate transforms that resample a child source.
pub mod transform;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2, wrap};
pub use crate::foundation::error::{TesseraError, TesseraResult};
pub use crate::foundation::math::granulate;

pub use crate::color::rgba::Color;
pub use crate::source::solid::Solid;
pub use crate::source::{BoxedSource, ColorSource, IntoSource};

pub use crate::render::bitmap::Bitmap;
pub use crate::render::raster::{RenderSettings, RenderThreading, rasterize};

pub use crate::cache::antialias::Antialias;
pub use crate::cache::buffered::Buffered;
pub use crate::cache::memoized::Memoized;

pub use crate::gradient::linear::LinearGradient;
pub use crate::gradient::radial::RadialGradient;
pub use crate::gradient::stops::{GradientStop, GradientStops};

pub use crate::noise::bark::Bark;
pub use crate::noise::camouflage::Camouflage;
pub use crate::noise::circles::{Circles, Rings};
pub use crate::noise::clouds::Clouds;
pub use crate::noise::curve::Curve;
pub use crate::noise::frosted::FrostedGlass;
pub use crate::noise::glass::Glass;
pub use crate::noise::perlin::{Palette, PerlinGrid, PerlinNoise};
pub use crate::noise::velvet::Velvet;

pub use crate::cellular::metric::{CellKind, Metric};
pub use crate::cellular::worley::{CellSample, CellularNoise};

pub use crate::composite::{Add, Blend, Lerp, Multiply};

pub use crate::shape::circle::CircleMask;
pub use crate::shape::ellipse::EllipseMask;
pub use crate::shape::path::{FillRule, PathMask};
pub use crate::shape::rect::RectMask;
pub use crate::shape::roof_tiles::{RoofTiles, TileLayout};

pub use crate::transform::affine::Transformed;
pub use crate::transform::non_linear::{Fisheye, Polar};

pub use crate::assets::registry::AssetRegistry;
pub use crate::assets::store::{BitmapStore, DirStore};

pub use crate::recipes::Recipe;
