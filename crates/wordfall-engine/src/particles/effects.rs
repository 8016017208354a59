use super::emitter::{Emitter, EmitterConfig};
use super::particle::ParticleConfig;
use crate::core::rng::Rng;
use crate::render::surface::LayerStack;

/// Handle to an emitter owned by [`EffectsState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId(pub u32);

/// Container for every running emitter.
///
/// Emitters tick in spawn order, each on its own layer. Stopped emitters and
/// one-shot emitters with nothing left alive are dropped after the tick.
pub struct EffectsState {
    emitters: Vec<(EmitterId, Emitter)>,
    next_id: u32,
}

impl EffectsState {
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
            next_id: 1,
        }
    }

    /// Build an emitter from the two configs, start it, and keep it until it finishes.
    pub fn spawn(
        &mut self,
        particle: &ParticleConfig,
        config: &EmitterConfig,
        rng: &mut Rng,
    ) -> EmitterId {
        self.insert(Emitter::new(particle, config, rng))
    }

    /// Take ownership of a prebuilt emitter and start it.
    pub fn insert(&mut self, mut emitter: Emitter) -> EmitterId {
        let id = EmitterId(self.next_id);
        self.next_id += 1;
        emitter.start();
        self.emitters.push((id, emitter));
        id
    }

    pub fn get(&self, id: EmitterId) -> Option<&Emitter> {
        self.emitters.iter().find(|(eid, _)| *eid == id).map(|(_, e)| e)
    }

    pub fn get_mut(&mut self, id: EmitterId) -> Option<&mut Emitter> {
        self.emitters
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    /// Tick every emitter on its layer, then retire the ones that are done.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng, surfaces: &mut LayerStack) {
        for (_, emitter) in &mut self.emitters {
            let layer = emitter.layer();
            emitter.tick(dt, rng, surfaces.layer_mut(layer));
        }

        self.emitters.retain(|(id, e)| {
            let keep = e.is_active() && !e.is_finished();
            if !keep {
                log::trace!("emitter {} retired from {:?}", id.0, e.layer());
            }
            keep
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.iter().map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    /// Drop every emitter.
    pub fn clear(&mut self) {
        self.emitters.clear();
    }
}

impl Default for EffectsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{TextureHandle, TextureId};
    use crate::render::layer::SurfaceLayer;
    use glam::Vec2;

    fn burst() -> ParticleConfig {
        ParticleConfig::new(TextureHandle {
            id: TextureId(2),
            width: 6.0,
            height: 6.0,
        })
        .with_lifetime(0.2)
        .with_emission_shape(10.0, 10.0)
        .with_speed(20.0)
        .with_spread(360.0)
        .with_scale(0.5, 0.1)
    }

    #[test]
    fn spawn_starts_emitter() {
        let mut rng = Rng::new(1);
        let mut effects = EffectsState::new();
        let id = effects.spawn(
            &burst(),
            &EmitterConfig::new(SurfaceLayer::Vanish, Vec2::new(20.0, 20.0)),
            &mut rng,
        );
        assert_eq!(effects.len(), 1);
        assert!(effects.get(id).unwrap().is_active());
        assert_eq!(effects.get(id).unwrap().max_particles(), 100);
    }

    #[test]
    fn tick_draws_on_emitter_layer_only() {
        let mut rng = Rng::new(2);
        let mut effects = EffectsState::new();
        let mut surfaces = LayerStack::new();
        effects.spawn(
            &burst(),
            &EmitterConfig::new(SurfaceLayer::Dead, Vec2::new(50.0, 50.0)),
            &mut rng,
        );
        effects.tick(0.016, &mut rng, &mut surfaces);

        assert!(surfaces.layer(SurfaceLayer::Main).is_empty());
        assert!(surfaces.layer(SurfaceLayer::Heart).is_empty());
        assert_eq!(surfaces.layer(SurfaceLayer::Dead).image_count(), 1);
    }

    #[test]
    fn finished_oneshot_emitters_are_retired() {
        let mut rng = Rng::new(3);
        let mut effects = EffectsState::new();
        let mut surfaces = LayerStack::new();
        effects.spawn(
            &burst(),
            &EmitterConfig::new(SurfaceLayer::Spawn, Vec2::ZERO),
            &mut rng,
        );

        let mut frames = 0;
        while !effects.is_empty() {
            surfaces.reset();
            effects.tick(1.0 / 60.0, &mut rng, &mut surfaces);
            frames += 1;
            assert!(frames < 120, "one-shot burst should retire within two seconds");
        }
        // Last tick left the layer cleared.
        assert_eq!(
            surfaces.layer(SurfaceLayer::Spawn).commands(),
            &[crate::render::surface::DrawCommand::Clear]
        );
    }

    #[test]
    fn stopped_emitters_are_retired() {
        let mut rng = Rng::new(4);
        let mut effects = EffectsState::new();
        let mut surfaces = LayerStack::new();
        let id = effects.spawn(
            &burst().with_oneshot(false),
            &EmitterConfig::new(SurfaceLayer::Heart, Vec2::ZERO),
            &mut rng,
        );
        effects.tick(0.016, &mut rng, &mut surfaces);
        assert_eq!(effects.len(), 1);

        effects.get_mut(id).unwrap().stop();
        effects.tick(0.016, &mut rng, &mut surfaces);
        assert!(effects.is_empty());
        assert!(effects.get(id).is_none());
    }
}
