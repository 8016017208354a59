use glam::Vec2;
use wordfall_engine::Rng;

use crate::tuning::*;

/// Every word that can fall, roughly shortest first.
pub const DICTIONARY: &[&str] = &[
    "blue", "lamp", "star", "fish", "code", "bird", "book", "tree", "moon", "rose",
    "gold", "fire", "song", "time", "hope", "wind", "dark", "lake", "ship", "wave",
    "apple", "happy", "music", "beach", "water", "cloud", "table", "space", "earth", "dream",
    "smile", "grape", "ocean", "sunny", "green", "peace", "light", "stone", "laugh",
    "guitar", "flower", "orange", "summer", "planet", "purple", "coffee", "forest", "friend", "banana",
    "cookie", "sunset", "puzzle", "bridge", "garden", "singer", "piano", "turtle", "wisdom",
    "library", "rainbow", "journey", "victory", "silence", "freedom", "morning", "concert", "picture",
    "balance", "wonder", "diamond", "village", "blessed", "perfect", "breathe", "sunrise", "whisper", "courage",
    "mountain", "beautiful", "bluebird", "sunshine", "triangle", "laughter", "remember",
    "umbrella", "firework", "raindrop", "tomorrow", "silhouette", "wonderful", "happiness", "treasure",
];

/// One word on its way down.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingWord {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Pixels per second.
    pub fall_speed: f32,
    /// Typing it correctly grants an extra life.
    pub bonus: bool,
    /// Echo of the typed buffer while it is a prefix of `text`.
    pub typed: String,
}

impl FallingWord {
    pub fn new(text: impl Into<String>, x: f32, y: f32, fall_speed: f32, bonus: bool) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            fall_speed,
            bonus,
            typed: String::new(),
        }
    }

    /// Size class: the number of letters.
    pub fn size(&self) -> usize {
        self.text.chars().count()
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn advance(&mut self, dt: f32) {
        self.y += self.fall_speed * dt;
    }

    /// Whether the word has dropped below the bottom edge plus the margin.
    pub fn is_past(&self, height: f32) -> bool {
        self.y > height + BOUNDARY_MARGIN
    }
}

/// The words currently on screen, in spawn order. A word's text is "in use"
/// exactly while the word is in the pool.
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: Vec<FallingWord>,
}

impl WordPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FallingWord> {
        self.words.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FallingWord> {
        self.words.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FallingWord> {
        self.words.get_mut(index)
    }

    pub fn in_use(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text == text)
    }

    /// Add a word. Returns false (and drops it) if its text is already on screen.
    pub fn push(&mut self, word: FallingWord) -> bool {
        if self.in_use(&word.text) {
            return false;
        }
        self.words.push(word);
        true
    }

    pub fn remove(&mut self, index: usize) -> FallingWord {
        self.words.remove(index)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// One entry per word on screen, so common lengths are drawn more often.
    pub fn sizes(&self) -> Vec<usize> {
        self.words.iter().map(FallingWord::size).collect()
    }

    /// Spawn a random unused dictionary word at the top of the screen.
    /// Returns None once every dictionary word is on screen.
    pub fn spawn(&mut self, rng: &mut Rng, width: f32) -> Option<&FallingWord> {
        let unused: Vec<&'static str> = DICTIONARY
            .iter()
            .copied()
            .filter(|text| !self.in_use(text))
            .collect();
        let text = *rng.choose(&unused)?;

        let x = rng.range_int(SPAWN_X_MIN, width as i32 - SPAWN_X_RIGHT_MARGIN) as f32;
        let fall_speed = rng.range_int(FALL_SPEED_MIN, FALL_SPEED_MAX) as f32;
        let bonus = rng.one_in(BONUS_ONE_IN);

        self.words.push(FallingWord::new(text, x, 0.0, fall_speed, bonus));
        log::debug!("spawned '{}' at x={} speed={} bonus={}", text, x, fall_speed, bonus);
        self.words.last()
    }

    /// Move every word down and pull out the ones that left the screen,
    /// in pool order.
    pub fn advance(&mut self, dt: f32, height: f32) -> Vec<FallingWord> {
        let mut missed = Vec::new();
        let mut i = 0;
        while i < self.words.len() {
            self.words[i].advance(dt);
            if self.words[i].is_past(height) {
                missed.push(self.words.remove(i));
            } else {
                i += 1;
            }
        }
        missed
    }
}
