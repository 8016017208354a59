//! Gameplay constants.

// World
pub const WORLD_WIDTH: f32 = 240.0;
pub const WORLD_HEIGHT: f32 = 200.0;
pub const PIXEL_SCALE: f32 = 2.0;
pub const SEED: u64 = 0x5eed_f411;

// Session
pub const START_LIVES: i32 = 4;
pub const INPUT_MAX_LEN: usize = 10;

// Spawning (seconds)
pub const SPAWN_INTERVAL: f32 = 5.0;
pub const SPAWN_INTERVAL_STEP: f32 = 0.08;
pub const SPAWN_INTERVAL_MIN: f32 = 1.5;
/// Below this many words on screen, a refill batch spawns every frame.
pub const MIN_ACTIVE_WORDS: usize = 2;
pub const MAX_SPAWN_BATCH: i32 = 2;

// Falling words
pub const SPAWN_X_MIN: i32 = 5;
pub const SPAWN_X_RIGHT_MARGIN: i32 = 50;
pub const FALL_SPEED_MIN: i32 = 5;
pub const FALL_SPEED_MAX: i32 = 10;
pub const BONUS_ONE_IN: u32 = 4;
pub const BOUNDARY_MARGIN: f32 = 4.0;
/// Delay between typing a bonus word and the extra life showing up.
pub const BONUS_LIFE_DELAY: f64 = 0.3;

// Target size bounce
pub const TARGET_GRAVITY: f32 = 1200.0;
pub const TARGET_JUMP_VELOCITY: f32 = -120.0;
/// Resting height, measured up from the bottom of the world.
pub const TARGET_REST_OFFSET: f32 = 50.0;
pub const TARGET_INITIAL_VALUE: usize = 6;

// Text
pub const FONT_SIZE: f32 = 16.0;
pub const WORD_FONT: &str = "16px m5x7";
pub const TARGET_FONT: &str = "24px roboto";
pub const WORD_COLOR: &str = "#55f";
pub const TYPED_COLOR: &str = "#ccc";
/// Horizontal advance of one glyph of the word font.
pub const GLYPH_WIDTH: f32 = 6.0;

// Audio
pub const BLIP_VOLUME: f32 = 0.08;
pub const SFX_VOLUME: f32 = 0.1;

// Particle bursts
pub const BURST_LIFETIME: f32 = 0.2;
pub const BURST_PARTICLES: usize = 100;
pub const BURST_START_SCALE: f32 = 0.5;
pub const BURST_END_SCALE: f32 = 0.1;
