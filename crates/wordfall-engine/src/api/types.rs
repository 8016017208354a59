use serde::Serialize;

/// Index of a texture in the asset registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TextureId(pub u32);

/// A loaded image: registry id plus its natural pixel size.
/// Copyable, so every particle of a pool shares the same handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: TextureId,
    pub width: f32,
    pub height: f32,
}

impl TextureHandle {
    pub fn size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width, self.height)
    }
}

/// Index of an audio clip in the asset registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SoundId(pub u32);

/// A "play this clip at this volume" request, forwarded to the host audio service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundCue {
    pub sound: SoundId,
    pub volume: f32,
}
