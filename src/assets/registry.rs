use std::{collections::HashMap, sync::Arc};

use crate::{
    assets::store::BitmapStore,
    foundation::error::TesseraResult,
    render::{
        bitmap::Bitmap,
        raster::{RenderSettings, rasterize},
    },
    source::ColorSource,
};

/// Baked bitmaps for a running host, built once at startup and passed around
/// by reference.
///
/// An optional [`BitmapStore`] is consulted before building a tree and written
/// after, so expensive bakes survive restarts.
#[derive(Default)]
pub struct AssetRegistry {
    settings: RenderSettings,
    bitmaps: HashMap<String, Arc<Bitmap>>,
    store: Option<Box<dyn BitmapStore>>,
}

impl std::fmt::Debug for AssetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.bitmaps.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("AssetRegistry")
            .field("settings", &self.settings)
            .field("keys", &keys)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

impl AssetRegistry {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn with_store(mut self, store: impl BitmapStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn get(&self, key: &str) -> Option<Arc<Bitmap>> {
        self.bitmaps.get(key).cloned()
    }

    pub fn insert(&mut self, key: impl Into<String>, bitmap: Bitmap) -> Arc<Bitmap> {
        let bitmap = Arc::new(bitmap);
        self.bitmaps.insert(key.into(), Arc::clone(&bitmap));
        bitmap
    }

    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    /// Returns the bitmap for `key`, building and rasterizing `build()` only
    /// when neither memory nor the store has it.
    #[tracing::instrument(skip(self, build))]
    pub fn bake<S, F>(&mut self, key: &str, build: F) -> TesseraResult<Arc<Bitmap>>
    where
        S: ColorSource,
        F: FnOnce() -> S,
    {
        if let Some(hit) = self.get(key) {
            return Ok(hit);
        }

        let stored = match &self.store {
            Some(store) => store.load(key)?,
            None => None,
        };
        if let Some(stored) = stored {
            tracing::debug!(key, "bitmap loaded from store");
            return Ok(self.insert(key, stored));
        }

        let source = build();
        let bitmap = rasterize(&source, &self.settings)?;
        if let Some(store) = &self.store {
            store.save(key, &bitmap)?;
        }
        tracing::debug!(key, width = bitmap.width(), height = bitmap.height(), "bitmap baked");
        Ok(self.insert(key, bitmap))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/registry.rs"]
mod tests;
