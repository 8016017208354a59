//! Resolved assets and the four particle bursts.

use glam::Vec2;
use wordfall_engine::{
    AssetRegistry, EmitterConfig, EngineError, ParticleConfig, SoundId, SurfaceLayer,
    TextureHandle,
};

use crate::tuning::*;
use crate::words::FallingWord;

/// Every image the game draws, looked up once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Textures {
    pub start: TextureHandle,
    pub gameover: TextureHandle,
    pub bg: TextureHandle,
    pub heart: TextureHandle,
    pub vanish: TextureHandle,
    pub generic: TextureHandle,
}

/// Every clip the game plays.
#[derive(Debug, Clone, Copy)]
pub struct Sounds {
    pub blips: [SoundId; 3],
    pub explosions: [SoundId; 2],
    pub jump: SoundId,
    pub pick: SoundId,
}

#[derive(Debug, Clone, Copy)]
pub struct GameAssets {
    pub textures: Textures,
    pub sounds: Sounds,
}

impl GameAssets {
    /// Fails on the first name the manifest lacks.
    pub fn resolve(assets: &AssetRegistry) -> Result<Self, EngineError> {
        let textures = Textures {
            start: assets.texture("start")?,
            gameover: assets.texture("gameover")?,
            bg: assets.texture("bg")?,
            heart: assets.texture("heart")?,
            vanish: assets.texture("vanish")?,
            generic: assets.texture("generic1")?,
        };
        let sounds = Sounds {
            blips: [
                assets.sound("blip1")?,
                assets.sound("blip2")?,
                assets.sound("blip3")?,
            ],
            explosions: [assets.sound("explode1")?, assets.sound("explode2")?],
            jump: assets.sound("jump1")?,
            pick: assets.sound("pick1")?,
        };
        Ok(Self { textures, sounds })
    }
}

/// A particle template plus the emitter that fires it.
pub type Burst = (ParticleConfig, EmitterConfig);

fn burst(texture: TextureHandle, layer: SurfaceLayer, position: Vec2) -> Burst {
    let particle = ParticleConfig::new(texture)
        .with_oneshot(true)
        .with_lifetime(BURST_LIFETIME)
        .with_position(position)
        .with_scale(BURST_START_SCALE, BURST_END_SCALE);
    let emitter = EmitterConfig::new(layer, position)
        .with_max_particles(BURST_PARTICLES)
        .with_explosive(false);
    (particle, emitter)
}

/// Left edge of a word plus two pixels per letter.
fn word_anchor(word: &FallingWord, y_offset: f32) -> Vec2 {
    Vec2::new(word.x + word.size() as f32 * 2.0, word.y + y_offset)
}

/// Hearts fly off the slot where the next life will appear.
pub fn heart(textures: &Textures, lives: i32, height: f32) -> Burst {
    let at = Vec2::new(lives as f32 * 9.0 + 2.0, height - 9.0);
    let (particle, emitter) = burst(textures.heart, SurfaceLayer::Heart, at);
    let particle = particle
        .with_emission_shape(10.0, 10.0)
        .with_gravity(Vec2::new(0.0, 1.0))
        .with_direction(Vec2::new(0.0, -1.0))
        .with_spread(360.0)
        .with_speed(20.0);
    (particle, emitter)
}

pub fn vanish(textures: &Textures, word: &FallingWord) -> Burst {
    let len = word.size() as f32;
    let (particle, emitter) = burst(textures.vanish, SurfaceLayer::Vanish, word_anchor(word, 0.0));
    let particle = particle
        .with_emission_shape(len * FONT_SIZE / 4.0, FONT_SIZE / 4.0)
        .with_gravity(Vec2::ZERO)
        .with_direction(Vec2::new(0.0, -1.0))
        .with_spread(90.0)
        .with_speed(20.0);
    (particle, emitter)
}

fn sparks(texture: TextureHandle, layer: SurfaceLayer, word: &FallingWord, y_offset: f32) -> Burst {
    let len = word.size() as f32;
    let (particle, emitter) = burst(texture, layer, word_anchor(word, y_offset));
    let particle = particle
        .with_emission_shape(len * FONT_SIZE / 2.0, FONT_SIZE / 2.0)
        .with_gravity(Vec2::new(0.0, 1.0))
        .with_direction(Vec2::new(0.0, 1.0))
        .with_spread(45.0)
        .with_speed(10.0);
    (particle, emitter)
}

pub fn spawn(textures: &Textures, word: &FallingWord) -> Burst {
    sparks(textures.generic, SurfaceLayer::Spawn, word, 0.0)
}

/// Fired where a word fell off the bottom.
pub fn dead(textures: &Textures, word: &FallingWord) -> Burst {
    sparks(textures.generic, SurfaceLayer::Dead, word, -8.0)
}
