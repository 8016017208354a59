use serde::Serialize;
use wordfall_engine::{
    AssetIndex, AssetRegistry, DrawCommand, EngineContext, EngineError, FixedTimestep,
    FrameClock, Game, GameConfig, InputEvent, InputQueue, RenderContext, SoundCue,
    SurfaceLayer, TimeStep,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    timestep: Option<FixedTimestep>,
    config: GameConfig,
    initialized: bool,
    frames: u64,
}

/// One layer's draw commands for the current frame.
#[derive(Debug, Serialize)]
pub struct LayerFrame<'a> {
    pub layer: SurfaceLayer,
    pub z_index: u32,
    pub commands: &'a [DrawCommand],
}

/// Everything the host needs to present one frame.
#[derive(Debug, Serialize)]
pub struct FrameSnapshot<'a> {
    pub frame: u64,
    pub layers: Vec<LayerFrame<'a>>,
    pub sounds: &'a [SoundCue],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();

        Self {
            game,
            ctx: EngineContext::new(config.clone()),
            input: InputQueue::new(),
            clock: FrameClock::new(),
            timestep: fixed_step(config.time_step),
            config,
            initialized: false,
            frames: 0,
        }
    }

    /// Load the asset manifest and initialize the game. Call once after construction.
    /// Any error (bad JSON, a name the game needs but the manifest lacks) aborts startup.
    pub fn init(&mut self, manifest_json: &str) -> Result<(), EngineError> {
        let assets = AssetRegistry::from_json(manifest_json)?;
        self.init_with_assets(assets)
    }

    pub fn init_with_assets(&mut self, assets: AssetRegistry) -> Result<(), EngineError> {
        self.config = self.game.config();
        self.timestep = fixed_step(self.config.time_step);
        self.ctx = EngineContext::with_assets(self.config.clone(), assets);
        self.clock.reset();
        self.game.init(&mut self.ctx)?;
        self.initialized = true;
        log::info!(
            "runner: initialized {}x{} world, {:?}",
            self.config.world_width,
            self.config.world_height,
            self.config.time_step
        );
        Ok(())
    }

    /// Push an input event into the queue. It is applied at the start of the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at host timestamp `now_ms`: refresh input edges, step the
    /// game, draw it, then tick every running emitter.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        self.ctx.clear_frame_data();
        let frame_dt = self.clock.advance(now_ms);

        // A fixed-step frame that runs no update leaves its events queued
        // for the next frame that does.
        let steps = self.timestep.as_mut().map(|t| t.accumulate(frame_dt));
        let consumes_input = steps != Some(0);
        if consumes_input {
            self.input.begin_frame();
        }

        let simulated = match (self.timestep.as_ref(), steps) {
            (Some(timestep), Some(steps)) => {
                let dt = timestep.dt();
                for i in 0..steps {
                    if i > 0 {
                        // Later steps see held keys but no new presses.
                        self.input.end_frame();
                        self.input.begin_frame();
                    }
                    self.ctx.advance_clock(dt);
                    self.game.update(&mut self.ctx, &self.input, dt);
                }
                steps as f32 * dt
            }
            _ => {
                self.ctx.advance_clock(frame_dt);
                self.game.update(&mut self.ctx, &self.input, frame_dt);
                frame_dt
            }
        };

        {
            let mut render_ctx = RenderContext {
                surfaces: &mut self.ctx.surfaces,
                config: &self.ctx.config,
            };
            self.game.render(&mut render_ctx);
        }

        self.ctx.tick_effects(simulated);
        if consumes_input {
            self.input.end_frame();
        }
        self.frames += 1;
        Ok(())
    }

    /// Borrow this frame's draw commands and sound cues.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            frame: self.frames,
            layers: self
                .ctx
                .surfaces
                .iter_touched()
                .map(|(layer, list)| LayerFrame {
                    layer,
                    z_index: layer.z_index(),
                    commands: list.commands(),
                })
                .collect(),
            sounds: &self.ctx.sounds,
        }
    }

    /// The current frame serialized for the host.
    pub fn frame_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(&self.snapshot()).map_err(EngineError::Encode)
    }

    /// Name tables so the host can map ids back to loaded files.
    pub fn asset_index(&self) -> &AssetIndex {
        self.ctx.assets.index()
    }

    pub fn asset_index_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self.asset_index()).map_err(EngineError::Encode)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn pixel_scale(&self) -> f32 {
        self.config.pixel_scale
    }
}

fn fixed_step(time_step: TimeStep) -> Option<FixedTimestep> {
    match time_step {
        TimeStep::Variable => None,
        TimeStep::Fixed(dt) => Some(FixedTimestep::new(dt)),
    }
}
