use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::{TesseraError, TesseraResult},
    render::bitmap::Bitmap,
};

/// Host-side persistence for baked bitmaps, keyed by an opaque string.
pub trait BitmapStore: Send + Sync {
    fn load(&self, key: &str) -> TesseraResult<Option<Bitmap>>;
    fn save(&self, key: &str, bitmap: &Bitmap) -> TesseraResult<()>;
}

/// Stores each bitmap as `<root>/<key>.png`.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> TesseraResult<PathBuf> {
        let name = file_stem(key)?;
        Ok(self.root.join(format!("{name}.png")))
    }
}

/// Keys map to file stems byte for byte: `[A-Za-z0-9._-]` pass through, every
/// other byte becomes `%XX`. Distinct keys never share a file.
fn file_stem(key: &str) -> TesseraResult<String> {
    if key.is_empty() {
        return Err(TesseraError::validation("bitmap key must be non-empty"));
    }
    let mut stem = String::with_capacity(key.len());
    for b in key.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-') {
            stem.push(char::from(b));
        } else {
            stem.push_str(&format!("%{b:02X}"));
        }
    }
    Ok(stem)
}

impl BitmapStore for DirStore {
    fn load(&self, key: &str) -> TesseraResult<Option<Bitmap>> {
        let path = self.path_for(key)?;
        if !path.is_file() {
            return Ok(None);
        }
        Bitmap::load_png(&path).map(Some)
    }

    fn save(&self, key: &str, bitmap: &Bitmap) -> TesseraResult<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create store dir '{}'", self.root.display()))?;
        bitmap.save_png(&self.path_for(key)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
