pub mod api;
pub mod core;
pub mod particles;
pub mod render;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::error::EngineError;
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{TextureId, TextureHandle, SoundId, SoundCue};
pub use core::math::{lerp, map_value, clamp, to_radians, to_degrees, snap_to_pixel};
pub use core::rng::Rng;
pub use core::time::{FixedTimestep, FrameClock, TimeStep};
pub use particles::{
    EffectsState, EmissionShape, Emitter, EmitterConfig, EmitterId,
    Particle, ParticleConfig,
};
pub use render::layer::SurfaceLayer;
pub use render::surface::{DrawCommand, DrawList, DrawSurface, LayerStack, TextStyle};
pub use input::actions::{Action, ActionState, Binding};
pub use input::queue::{InputEvent, InputQueue, Key, MouseButton};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{AssetIndex, AssetRegistry};
