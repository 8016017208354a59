use glam::Vec2;
use wordfall_engine::Rng;

use crate::tuning::*;

/// The word length the player has to match. Bounces when a word is typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSize {
    pub value: usize,
    pub position: Vec2,
    pub velocity: f32,
}

impl TargetSize {
    pub fn new(position: Vec2, value: usize) -> Self {
        Self {
            value,
            position,
            velocity: 0.0,
        }
    }

    /// Resting at the bottom center of a `width` x `height` world.
    pub fn resting(width: f32, height: f32) -> Self {
        Self::new(
            Vec2::new(width / 2.0 - 8.0, height - TARGET_REST_OFFSET),
            TARGET_INITIAL_VALUE,
        )
    }

    pub fn update(&mut self, dt: f32, height: f32) {
        self.velocity += TARGET_GRAVITY * dt;
        self.position.y += self.velocity * dt;

        let rest = height - TARGET_REST_OFFSET;
        if self.position.y > rest {
            self.position.y = rest;
            self.velocity = 0.0;
        }
    }

    pub fn jump(&mut self) {
        self.velocity = TARGET_JUMP_VELOCITY;
    }

    /// Pick a new value from `sizes`. An empty slice keeps the current value.
    pub fn resample(&mut self, sizes: &[usize], rng: &mut Rng) {
        if let Some(&size) = rng.choose(sizes) {
            self.value = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_rises_then_settles() {
        let mut target = TargetSize::resting(WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(target.position, Vec2::new(112.0, 150.0));

        target.jump();
        target.update(1.0 / 60.0, WORLD_HEIGHT);
        assert!(target.position.y < 150.0);

        for _ in 0..60 {
            target.update(1.0 / 60.0, WORLD_HEIGHT);
        }
        assert_eq!(target.position.y, 150.0);
        assert_eq!(target.velocity, 0.0);
    }

    #[test]
    fn resample_keeps_value_without_sizes() {
        let mut rng = Rng::new(3);
        let mut target = TargetSize::resting(WORLD_WIDTH, WORLD_HEIGHT);
        target.resample(&[], &mut rng);
        assert_eq!(target.value, TARGET_INITIAL_VALUE);

        target.resample(&[4, 4], &mut rng);
        assert_eq!(target.value, 4);
    }
}
