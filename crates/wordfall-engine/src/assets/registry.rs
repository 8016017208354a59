use std::collections::HashMap;
use serde::Serialize;

use crate::api::error::EngineError;
use crate::api::types::{SoundId, TextureHandle, TextureId};
use crate::assets::manifest::AssetManifest;

/// Name → id table handed back to the host so it knows which loaded
/// image or clip each id refers to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetIndex {
    pub textures: Vec<String>,
    pub sounds: Vec<String>,
}

/// Registry of loaded assets, built from an AssetManifest.
/// Ids are assigned in name order, so the same manifest always yields the same ids.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    textures: HashMap<String, TextureHandle>,
    sounds: HashMap<String, SoundId>,
    index: AssetIndex,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut texture_names: Vec<&String> = manifest.textures.keys().collect();
        texture_names.sort();
        let mut sound_names: Vec<&String> = manifest.sounds.keys().collect();
        sound_names.sort();

        let mut textures = HashMap::with_capacity(texture_names.len());
        for (i, name) in texture_names.iter().enumerate() {
            let desc = &manifest.textures[*name];
            textures.insert((*name).clone(), TextureHandle {
                id: TextureId(i as u32),
                width: desc.width as f32,
                height: desc.height as f32,
            });
        }

        let sounds = sound_names
            .iter()
            .enumerate()
            .map(|(i, name)| ((*name).clone(), SoundId(i as u32)))
            .collect();

        let index = AssetIndex {
            textures: texture_names.into_iter().cloned().collect(),
            sounds: sound_names.into_iter().cloned().collect(),
        };

        log::info!(
            "asset registry: {} textures, {} sounds",
            index.textures.len(),
            index.sounds.len()
        );

        Self { textures, sounds, index }
    }

    /// Parse a manifest and build the registry in one step.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(Self::from_manifest(&AssetManifest::from_json(json)?))
    }

    pub fn texture(&self, name: &str) -> Result<TextureHandle, EngineError> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::MissingTexture(name.to_string()))
    }

    pub fn sound(&self, name: &str) -> Result<SoundId, EngineError> {
        self.sounds
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::MissingSound(name.to_string()))
    }

    pub fn index(&self) -> &AssetIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "textures": {
            "vanish": { "path": "particles/vanish.png", "width": 8, "height": 8 },
            "bg": { "path": "background.png", "width": 240, "height": 200 }
        },
        "sounds": {
            "pick1": { "path": "sfx/pick1.wav" },
            "jump1": { "path": "sfx/jump1.wav" }
        }
    }"#;

    #[test]
    fn ids_follow_name_order() {
        let reg = AssetRegistry::from_json(JSON).unwrap();
        let bg = reg.texture("bg").unwrap();
        assert_eq!(bg.id, TextureId(0));
        assert_eq!(bg.width, 240.0);
        assert_eq!(reg.texture("vanish").unwrap().id, TextureId(1));
        assert_eq!(reg.sound("jump1").unwrap(), SoundId(0));
        assert_eq!(reg.sound("pick1").unwrap(), SoundId(1));
        assert_eq!(reg.index().textures, vec!["bg", "vanish"]);
    }

    #[test]
    fn unknown_names_are_errors() {
        let reg = AssetRegistry::from_json(JSON).unwrap();
        assert!(matches!(reg.texture("nope"), Err(EngineError::MissingTexture(n)) if n == "nope"));
        assert!(matches!(reg.sound("nope"), Err(EngineError::MissingSound(_))));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let reg = AssetRegistry::new();
        assert!(reg.texture("bg").is_err());
    }
}
