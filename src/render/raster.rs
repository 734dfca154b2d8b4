use rayon::prelude::*;

use crate::{
    cache::antialias::antialiased_color,
    color::rgba::Color,
    foundation::error::{TesseraError, TesseraResult},
    render::bitmap::Bitmap,
    source::ColorSource,
};

/// Row-parallelism options for [`rasterize`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Worker threads; `None` lets rayon pick.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Rasterization settings, loadable from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub threading: RenderThreading,
    /// Supersample every pixel with the fixed 2x2 pattern.
    pub antialias: bool,
}

impl RenderSettings {
    pub fn from_json(text: &str) -> TesseraResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| TesseraError::validation(format!("invalid render settings: {e}")))
    }
}

/// Rasterize `source` according to `settings`.
#[tracing::instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn rasterize<S: ColorSource + ?Sized>(
    source: &S,
    settings: &RenderSettings,
) -> TesseraResult<Bitmap> {
    let pick = |x: f64, y: f64| {
        if settings.antialias {
            antialiased_color(source, x, y)
        } else {
            source.get_color(x, y)
        }
    };

    let mut out = Bitmap::new(source.width(), source.height());
    if !settings.threading.parallel {
        fill_rows(&mut out, pick);
        return Ok(out);
    }

    let pool = build_thread_pool(settings.threading.threads)?;
    let row_bytes = out.width() as usize * 4;
    let width = out.width();
    pool.install(|| {
        out.data_mut()
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| write_row(row, width, y as u32, &pick));
    });
    tracing::debug!(threads = pool.current_num_threads(), "parallel rasterization done");
    Ok(out)
}

pub(crate) fn rasterize_serial<S: ColorSource + ?Sized>(source: &S) -> Bitmap {
    let mut out = Bitmap::new(source.width(), source.height());
    fill_rows(&mut out, |x, y| source.get_color(x, y));
    out
}

pub(crate) fn rasterize_into<S: ColorSource + ?Sized>(
    source: &S,
    surface: &mut Bitmap,
    x: i64,
    y: i64,
) {
    for sy in 0..source.height() {
        let Ok(dy) = u32::try_from(y + i64::from(sy)) else {
            continue;
        };
        if dy >= surface.height() {
            break;
        }
        for sx in 0..source.width() {
            let Ok(dx) = u32::try_from(x + i64::from(sx)) else {
                continue;
            };
            if dx >= surface.width() {
                break;
            }
            surface.set_pixel(dx, dy, source.get_color(f64::from(sx), f64::from(sy)));
        }
    }
}

fn fill_rows(out: &mut Bitmap, pick: impl Fn(f64, f64) -> Color) {
    let width = out.width();
    let row_bytes = width as usize * 4;
    for (y, row) in out.data_mut().chunks_exact_mut(row_bytes).enumerate() {
        write_row(row, width, y as u32, &pick);
    }
}

fn write_row(row: &mut [u8], width: u32, y: u32, pick: &impl Fn(f64, f64) -> Color) {
    for (x, px) in (0..width).zip(row.chunks_exact_mut(4)) {
        px.copy_from_slice(&pick(f64::from(x), f64::from(y)).to_rgba8());
    }
}

fn build_thread_pool(threads: Option<usize>) -> TesseraResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TesseraError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
