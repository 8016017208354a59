use glam::Vec2;

use crate::api::error::EngineError;
use crate::api::types::{SoundCue, SoundId};
use crate::assets::registry::AssetRegistry;
use crate::core::rng::Rng;
use crate::core::time::TimeStep;
use crate::input::queue::InputQueue;
use crate::particles::{EffectsState, EmitterConfig, EmitterId, ParticleConfig};
use crate::render::surface::LayerStack;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in pixels (default: 240).
    pub world_width: f32,
    /// World height in pixels (default: 200).
    pub world_height: f32,
    /// CSS upscale factor the host applies to every canvas (default: 2).
    pub pixel_scale: f32,
    /// Variable (default) or fixed simulation step.
    pub time_step: TimeStep,
    /// Seed for the context RNG.
    pub seed: u64,
    /// Maximum number of sound cues per frame (default: 32).
    pub max_sounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 240.0,
            world_height: 200.0,
            pixel_scale: 2.0,
            time_step: TimeStep::Variable,
            seed: 42,
            max_sounds: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Resolve assets and set up initial state. An error aborts startup.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), EngineError>;

    /// One simulation step of `dt` seconds. Input edges are already up to date.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// Draw the current state. Emitters draw their own layers afterwards.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub config: GameConfig,
    pub assets: AssetRegistry,
    pub effects: EffectsState,
    pub surfaces: LayerStack,
    pub rng: Rng,
    pub sounds: Vec<SoundCue>,
    /// Seconds simulated since the context was created.
    elapsed: f64,
}

impl EngineContext {
    pub fn new(config: GameConfig) -> Self {
        Self::with_assets(config, AssetRegistry::new())
    }

    pub fn with_assets(config: GameConfig, assets: AssetRegistry) -> Self {
        Self {
            rng: Rng::new(config.seed),
            sounds: Vec::with_capacity(config.max_sounds),
            config,
            assets,
            effects: EffectsState::new(),
            surfaces: LayerStack::new(),
            elapsed: 0.0,
        }
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.config.world_width, self.config.world_height)
    }

    /// Queue a clip for the host to play. Cues past `max_sounds` in one frame are dropped.
    pub fn play_sound(&mut self, sound: SoundId, volume: f32) {
        if self.sounds.len() >= self.config.max_sounds {
            log::debug!("sound cue {:?} dropped: {} already queued", sound, self.sounds.len());
            return;
        }
        self.sounds.push(SoundCue { sound, volume });
    }

    /// Build and start an emitter. It keeps ticking every frame until it finishes.
    pub fn spawn_emitter(&mut self, particle: &ParticleConfig, config: &EmitterConfig) -> EmitterId {
        self.effects.spawn(particle, config, &mut self.rng)
    }

    /// Tick every running emitter onto its layer.
    pub fn tick_effects(&mut self, dt: f32) {
        self.effects.tick(dt, &mut self.rng, &mut self.surfaces);
    }

    /// Advance the simulation clock. Called by the runner once per step.
    pub fn advance_clock(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Clear per-frame transient data (sound cues, draw commands).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.surfaces.reset();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Render context for the game's draw pass.
pub struct RenderContext<'a> {
    pub surfaces: &'a mut LayerStack,
    pub config: &'a GameConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{TextureHandle, TextureId};
    use crate::render::layer::SurfaceLayer;

    #[test]
    fn sound_cues_are_capped_per_frame() {
        let mut ctx = EngineContext::new(GameConfig {
            max_sounds: 2,
            ..GameConfig::default()
        });
        for _ in 0..5 {
            ctx.play_sound(SoundId(1), 0.1);
        }
        assert_eq!(ctx.sounds.len(), 2);
        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
    }

    #[test]
    fn spawned_emitters_tick_on_their_layer() {
        let mut ctx = EngineContext::default();
        let tex = TextureHandle {
            id: TextureId(0),
            width: 4.0,
            height: 4.0,
        };
        let particle = ParticleConfig::new(tex).with_lifetime(0.2).with_speed(10.0);
        let id = ctx.spawn_emitter(
            &particle,
            &EmitterConfig::new(SurfaceLayer::Heart, Vec2::new(10.0, 190.0)),
        );
        ctx.tick_effects(1.0 / 60.0);
        assert!(ctx.effects.get(id).is_some());
        assert_eq!(ctx.surfaces.layer(SurfaceLayer::Heart).image_count(), 1);

        ctx.clear_frame_data();
        assert!(ctx.surfaces.layer(SurfaceLayer::Heart).is_empty());
    }

    #[test]
    fn clock_accumulates() {
        let mut ctx = EngineContext::default();
        ctx.advance_clock(0.5);
        ctx.advance_clock(0.25);
        assert!((ctx.elapsed() - 0.75).abs() < 1e-9);
        assert_eq!(ctx.world_size(), Vec2::new(240.0, 200.0));
    }
}
