//! Pooled particle simulation: particles, the emitters that own them,
//! and the collection that ticks every running emitter.

mod effects;
mod emitter;
mod particle;

pub use effects::{EffectsState, EmitterId};
pub use emitter::{Emitter, EmitterConfig};
pub use particle::{EmissionShape, Particle, ParticleConfig};
