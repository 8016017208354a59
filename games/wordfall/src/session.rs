use wordfall_engine::Rng;

use crate::target::TargetSize;
use crate::tuning::*;
use crate::words::WordPool;

/// Everything one play-through owns. Built once at startup and reset
/// whenever the game returns to the start screen.
#[derive(Debug, Clone)]
pub struct Session {
    pub score: u32,
    /// Signed: a boundary miss and a wrong-size match can land in the same frame.
    pub lives: i32,
    /// Seconds between periodic spawn batches.
    pub spawn_interval: f32,
    /// Seconds since the last periodic spawn batch.
    pub since_spawn: f32,
    /// Lowercase letters typed so far.
    pub input: String,
    pub words: WordPool,
    pub target: TargetSize,
    /// Session-clock times at which a bonus life is granted.
    pending_lives: Vec<f64>,
}

impl Session {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
            spawn_interval: SPAWN_INTERVAL,
            since_spawn: 0.0,
            input: String::new(),
            words: WordPool::new(),
            target: TargetSize::resting(width, height),
            pending_lives: Vec::new(),
        }
    }

    /// Back to a fresh game. The target keeps its value and position.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.spawn_interval = SPAWN_INTERVAL;
        self.since_spawn = 0.0;
        self.input.clear();
        self.words.clear();
        self.pending_lives.clear();
    }

    pub fn is_over(&self) -> bool {
        self.lives <= 0
    }

    /// Shorten the spawn interval after a correct word.
    pub fn speed_up(&mut self) {
        self.spawn_interval = (self.spawn_interval - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN);
        log::debug!("spawn interval now {:.2}s", self.spawn_interval);
    }

    /// Grant a life `BONUS_LIFE_DELAY` seconds after `now`.
    pub fn schedule_bonus_life(&mut self, now: f64) {
        self.pending_lives.push(now + BONUS_LIFE_DELAY);
    }

    /// Apply every bonus life that is due at `now`. Returns how many were granted.
    pub fn apply_due(&mut self, now: f64) -> u32 {
        let before = self.pending_lives.len();
        self.pending_lives.retain(|&due| due > now);
        let granted = (before - self.pending_lives.len()) as u32;
        self.lives += granted as i32;
        granted
    }

    pub fn pending_bonus_lives(&self) -> usize {
        self.pending_lives.len()
    }

    /// Advance the periodic spawn timer. True when a batch is due; the timer restarts.
    pub fn tick_spawn_timer(&mut self, dt: f32) -> bool {
        self.since_spawn += dt;
        if self.since_spawn > self.spawn_interval {
            self.since_spawn = 0.0;
            true
        } else {
            false
        }
    }

    /// Resample the target if no word on screen has its size.
    pub fn ensure_target(&mut self, rng: &mut Rng) {
        let sizes = self.words.sizes();
        if !sizes.contains(&self.target.value) {
            self.target.resample(&sizes, rng);
        }
    }

    /// Unconditionally pick a new target from the words on screen.
    pub fn next_target(&mut self, rng: &mut Rng) {
        let sizes = self.words.sizes();
        self.target.resample(&sizes, rng);
    }
}
