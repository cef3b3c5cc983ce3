//! Asset management system
//!
//! Games declare their images and sounds during preload. The manager keeps
//! the manifest (key → path, plus pixel size for images) so later code can
//! refer to assets by key and size sprites and colliders from them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Image asset declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Lookup key
    pub key: String,
    /// Path relative to the asset root
    pub path: String,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl ImageAsset {
    /// Declare an image
    pub fn new(key: impl Into<String>, path: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            width,
            height,
        }
    }

    /// Radius of a circle that roughly covers the image
    pub fn bounding_radius(&self) -> f32 {
        (self.width + self.height) * 0.25
    }
}

/// Audio asset declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAsset {
    /// Lookup key
    pub key: String,
    /// Path relative to the asset root
    pub path: String,
}

impl AudioAsset {
    /// Declare a sound
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// Asset management system
#[derive(Debug, Default)]
pub struct AssetManager {
    root: PathBuf,
    images: HashMap<String, ImageAsset>,
    sounds: HashMap<String, AudioAsset>,
}

impl AssetManager {
    /// Create a new asset manager resolving paths under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Declare an image asset
    pub fn load_image(&mut self, image: ImageAsset) -> Result<(), AssetError> {
        if image.width <= 0.0 || image.height <= 0.0 {
            return Err(AssetError::InvalidSize(image.key));
        }
        if self.images.contains_key(&image.key) {
            return Err(AssetError::Duplicate(image.key));
        }
        log::debug!("Registered image '{}' -> {}", image.key, image.path);
        self.images.insert(image.key.clone(), image);
        Ok(())
    }

    /// Declare an audio asset
    pub fn load_audio(&mut self, sound: AudioAsset) -> Result<(), AssetError> {
        if self.sounds.contains_key(&sound.key) {
            return Err(AssetError::Duplicate(sound.key));
        }
        log::debug!("Registered sound '{}' -> {}", sound.key, sound.path);
        self.sounds.insert(sound.key.clone(), sound);
        Ok(())
    }

    /// Look up an image by key
    pub fn image(&self, key: &str) -> Result<&ImageAsset, AssetError> {
        self.images
            .get(key)
            .ok_or_else(|| AssetError::Unknown(key.to_string()))
    }

    /// Look up a sound by key
    pub fn audio(&self, key: &str) -> Result<&AudioAsset, AssetError> {
        self.sounds
            .get(key)
            .ok_or_else(|| AssetError::Unknown(key.to_string()))
    }

    /// Full path of an asset file
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Asset root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of declared images and sounds
    pub fn len(&self) -> usize {
        self.images.len() + self.sounds.len()
    }

    /// Whether nothing has been declared
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every declared file exists on disk
    pub fn verify_files(&self) -> Result<(), AssetError> {
        let paths = self
            .images
            .values()
            .map(|image| &image.path)
            .chain(self.sounds.values().map(|sound| &sound.path));

        for relative in paths {
            let full = self.resolve(relative);
            if !full.exists() {
                return Err(AssetError::NotFound(full.display().to_string()));
            }
        }
        Ok(())
    }
}

/// Asset errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Asset file not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Key was never declared
    #[error("Unknown asset key: {0}")]
    Unknown(String),

    /// Key declared twice
    #[error("Asset key declared twice: {0}")]
    Duplicate(String),

    /// Image declared with a non-positive size
    #[error("Image has no size: {0}")]
    InvalidSize(String),
}
