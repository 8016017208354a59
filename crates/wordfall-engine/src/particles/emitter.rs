use glam::Vec2;

use super::particle::{Particle, ParticleConfig};
use crate::core::rng::Rng;
use crate::render::layer::SurfaceLayer;
use crate::render::surface::DrawSurface;

/// Emitter-level settings; the particle template is passed separately.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Surface the emitter clears and draws to every tick.
    pub layer: SurfaceLayer,
    /// Spawn origin handed to every particle before it updates.
    pub position: Vec2,
    /// Pool size. Fixed for the emitter's whole life.
    pub max_particles: usize,
    /// Activate every free particle per emission instead of one.
    pub explosive: bool,
}

impl EmitterConfig {
    pub fn new(layer: SurfaceLayer, position: Vec2) -> Self {
        Self {
            layer,
            position,
            max_particles: 100,
            explosive: false,
        }
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    pub fn with_explosive(mut self, explosive: bool) -> Self {
        self.explosive = explosive;
        self
    }
}

/// Owns a fixed pool of particles and releases them at `lifetime / max_particles` intervals.
///
/// Nothing happens until `start`. Each `tick` clears the emitter's surface once,
/// then updates (and so draws) the pool in index order.
#[derive(Debug, Clone)]
pub struct Emitter {
    active: bool,
    layer: SurfaceLayer,
    position: Vec2,
    explosive: bool,
    oneshot: bool,
    emit_interval: f32,
    /// Seconds since the last emission (or since `start`).
    elapsed: f32,
    has_emitted: bool,
    pool: Vec<Particle>,
}

impl Emitter {
    /// Build an inactive emitter with its whole pool constructed up front.
    pub fn new(particle: &ParticleConfig, config: &EmitterConfig, rng: &mut Rng) -> Self {
        let pool = (0..config.max_particles)
            .map(|_| Particle::new(particle, rng))
            .collect();

        Self {
            active: false,
            layer: config.layer,
            position: config.position,
            explosive: config.explosive,
            oneshot: particle.oneshot,
            // An empty pool divides to infinity and never emits.
            emit_interval: particle.lifetime / config.max_particles as f32,
            elapsed: 0.0,
            has_emitted: false,
            pool,
        }
    }

    /// Begin ticking. Calling it on a running emitter does nothing, so callers may
    /// invoke it every frame. Returns whether the emitter was actually started.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.elapsed = 0.0;
        log::trace!("emitter started on {:?} at {}", self.layer, self.position);
        true
    }

    /// Stop ticking. Particles keep their state; a later `start` resumes them.
    pub fn stop(&mut self) {
        if self.active {
            log::trace!("emitter stopped on {:?}", self.layer);
        }
        self.active = false;
    }

    /// Advance one frame: emit if the interval has elapsed, then clear the surface
    /// and update every particle with `dt`.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng, surface: &mut dyn DrawSurface) {
        if !self.active {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.emit_interval {
            self.emit();
            self.elapsed = 0.0;
        }

        surface.clear();

        let origin = self.position;
        for particle in &mut self.pool {
            // Respawns follow a moving emitter; live particles stay where they are.
            particle.set_start_position(origin);
            particle.update(dt, rng, surface);
        }
    }

    /// Activate the lowest-indexed inactive particle, or every inactive particle
    /// when explosive. Returns how many were activated; 0 when the pool is exhausted.
    pub fn emit(&mut self) -> usize {
        let mut activated = 0;
        for particle in self.pool.iter_mut().filter(|p| !p.active) {
            particle.active = true;
            activated += 1;
            if !self.explosive {
                break;
            }
        }
        if activated > 0 {
            self.has_emitted = true;
        }
        activated
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn layer(&self) -> SurfaceLayer {
        self.layer
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_explosive(&self) -> bool {
        self.explosive
    }

    pub fn emit_interval(&self) -> f32 {
        self.emit_interval
    }

    pub fn max_particles(&self) -> usize {
        self.pool.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.pool
    }

    pub fn active_count(&self) -> usize {
        self.pool.iter().filter(|p| p.active).count()
    }

    /// A one-shot emitter has nothing left to show once it has emitted and no particle is alive:
    /// the lowest free slot is always a spent particle from then on.
    pub fn is_finished(&self) -> bool {
        self.oneshot && self.has_emitted && self.active_count() == 0
    }
}
