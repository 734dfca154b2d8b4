//! Ready-made source trees for common game textures.
//!
//! Every recipe draws all of its random state from the `rng` it is given, so a
//! seeded generator reproduces the same texture.

use std::{f64::consts::TAU, str::FromStr};

use rand::Rng;

use crate::{
    cache::{antialias::Antialias, buffered::Buffered},
    cellular::{
        metric::{CellKind, Metric},
        worley::CellularNoise,
    },
    color::rgba::Color,
    composite::{Add, Blend, Lerp},
    foundation::{
        core::Canvas,
        error::{TesseraError, TesseraResult},
    },
    noise::{
        bark::Bark,
        camouflage::Camouflage,
        circles::{Circles, Rings},
        clouds::Clouds,
        curve::Curve,
        perlin::{Palette, PerlinNoise},
        velvet::Velvet,
    },
    shape::{
        circle::CircleMask,
        roof_tiles::{RoofTiles, TileLayout},
    },
    source::{BoxedSource, IntoSource, solid::Solid},
    transform::{affine::Transformed, non_linear::Polar},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipe {
    /// Roof tiles wrapped around a disc, transparent outside.
    TurretTop,
    Grass,
    Stone,
    Bark,
    Camouflage,
    /// Jittered growth rings.
    Wood,
}

impl Recipe {
    pub const ALL: [Recipe; 6] = [
        Recipe::TurretTop,
        Recipe::Grass,
        Recipe::Stone,
        Recipe::Bark,
        Recipe::Camouflage,
        Recipe::Wood,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Recipe::TurretTop => "turret_top",
            Recipe::Grass => "grass",
            Recipe::Stone => "stone",
            Recipe::Bark => "bark",
            Recipe::Camouflage => "camouflage",
            Recipe::Wood => "wood",
        }
    }

    pub fn build(self, canvas: Canvas) -> BoxedSource {
        self.build_with_rng(canvas, &mut rand::rng())
    }

    pub fn build_with_rng<R: Rng + ?Sized>(self, canvas: Canvas, rng: &mut R) -> BoxedSource {
        match self {
            Recipe::TurretTop => turret_top(canvas, rng).boxed(),
            Recipe::Grass => grass(canvas, rng).boxed(),
            Recipe::Stone => stone(canvas, rng).boxed(),
            Recipe::Bark => bark(canvas, rng).boxed(),
            Recipe::Camouflage => camouflage(canvas, rng).boxed(),
            Recipe::Wood => wood(canvas, rng).boxed(),
        }
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Recipe::ALL
            .into_iter()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Recipe::ALL.iter().map(|r| r.name()).collect();
                TesseraError::validation(format!(
                    "unknown recipe '{s}' (known: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Looks a recipe up by name and builds it with thread-local randomness.
pub fn build(name: &str, canvas: Canvas) -> TesseraResult<BoxedSource> {
    Ok(name.parse::<Recipe>()?.build(canvas))
}

/// Tile strip unwrapped around the canvas center, cut to a soft-edged disc.
pub fn turret_top<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Antialias {
    let center = canvas.center();
    let radius = f64::from(canvas.width.min(canvas.height)) / 2.0;
    let strip = Canvas::new((TAU * radius).ceil(), radius);

    let tiles = RoofTiles::new(
        Solid::new(strip, Color::from_rgba8(168, 72, 48, 255)),
        Solid::new(strip, Color::from_rgba8(60, 30, 24, 255)),
        TileLayout {
            horizontal_count: f64::from((strip.width / 12).max(4)),
            ..TileLayout::default()
        },
    );
    let grime = Clouds::with_rng(
        strip,
        Palette::new(Color::TRANSPARENT, Color::new(20.0, 10.0, 0.0, 110.0)),
        radius / 4.0,
        rng,
    );
    let roof = Polar::unwrap(canvas, Blend::new(tiles, grime), center);
    let disc = CircleMask::new(roof, Solid::new(canvas, Color::TRANSPARENT), center, radius - 1.0);
    Antialias::new(disc)
}

pub fn grass<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Add {
    let scale = f64::from(canvas.width.max(canvas.height)) / 8.0;
    let base = Clouds::with_rng(
        canvas,
        Palette::new(
            Color::from_rgba8(40, 92, 30, 255),
            Color::from_rgba8(96, 150, 52, 255),
        )
        .with_curve(Curve::Ease),
        scale,
        rng,
    );
    let blades = Velvet::with_rng(
        canvas,
        Palette::new(Color::TRANSPARENT, Color::new(30.0, 40.0, 0.0, 70.0)),
        2.0,
        rng,
    );
    Add::new(base, blades)
}

/// Baked cell field tinted by low-frequency noise, sheared off-axis.
pub fn stone<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Transformed {
    let cells = CellularNoise::with_rng(
        canvas,
        Palette::new(Color::from_rgba8(70, 70, 76, 255), Color::from_rgba8(170, 168, 160, 255)),
        400.0,
        Metric::Euclidean,
        CellKind::Net,
        rng,
    );
    let tint = PerlinNoise::with_rng(
        canvas,
        Palette::new(Color::from_rgba8(90, 84, 80, 255), Color::from_rgba8(140, 130, 120, 255)),
        f64::from(canvas.width.max(canvas.height)) / 4.0,
        rng,
    );
    let surface = Lerp::new(Buffered::new(&cells), tint, 0.3);
    Transformed::rotate(surface, canvas.center(), TAU / 16.0)
}

pub fn bark<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Bark {
    Bark::with_rng(
        canvas,
        Palette::new(Color::from_rgba8(58, 38, 22, 255), Color::from_rgba8(120, 86, 52, 255)),
        16.0,
        4.0,
        6.0,
        rng,
    )
}

pub fn camouflage<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Camouflage {
    Camouflage::with_rng(
        canvas,
        Palette::new(Color::from_rgba8(52, 64, 34, 255), Color::from_rgba8(140, 128, 84, 255)),
        f64::from(canvas.width.max(canvas.height)) / 6.0,
        3.0,
        4.0,
        rng,
    )
}

pub fn wood<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Circles {
    let rings = Rings::centered(canvas, f64::from(canvas.width.max(canvas.height)) / 24.0, 12.0)
        .with_jitter(3.0, 16.0);
    Circles::with_rng(
        canvas,
        Palette::new(Color::from_rgba8(150, 104, 60, 255), Color::from_rgba8(196, 150, 96, 255)),
        rings,
        rng,
    )
}

#[cfg(test)]
#[path = "../tests/unit/recipes.rs"]
mod tests;
