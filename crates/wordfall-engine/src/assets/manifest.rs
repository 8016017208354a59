use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;

/// Asset manifest describing every image and audio clip a game loads.
/// The host preloads the files; the manifest tells Rust their names and sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named images: name → path + natural size.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
    /// Named audio clips.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "particles/heart.png").
    pub path: String,
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
