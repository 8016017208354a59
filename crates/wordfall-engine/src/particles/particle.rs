//! A single pooled particle: Euler-integrated under constant gravity,
//! shrinking (or growing) linearly from `start_scale` to `end_scale` over its lifetime.

use glam::Vec2;

use crate::api::types::TextureHandle;
use crate::core::math::{lerp, map_value, snap_to_pixel, to_radians};
use crate::core::rng::Rng;
use crate::render::surface::DrawSurface;

/// Axis-aligned rectangle, centered on the spawn origin, that particles spawn inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmissionShape {
    pub width: f32,
    pub height: f32,
}

impl EmissionShape {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `point` lies inside the shape centered on `center` (edges included).
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let half = self.half_extents();
        (point.x - center.x).abs() <= half.x && (point.y - center.y).abs() <= half.y
    }
}

/// Template every particle of an emitter's pool is built from.
#[derive(Debug, Clone)]
pub struct ParticleConfig {
    pub texture: TextureHandle,
    /// Expire for good instead of resetting when the lifetime runs out.
    pub oneshot: bool,
    /// Lifetime in seconds.
    pub lifetime: f32,
    pub emission_shape: EmissionShape,
    /// Spawn origin until the owning emitter rebinds it.
    pub position: Vec2,
    /// Constant force added to the acceleration every step.
    pub gravity: Vec2,
    /// Base direction of travel. Only its angle matters.
    pub direction: Vec2,
    /// Full spread around `direction`, in degrees.
    pub spread: f32,
    /// Initial speed magnitude.
    pub speed: f32,
    pub start_scale: f32,
    pub end_scale: f32,
}

impl ParticleConfig {
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            oneshot: true,
            lifetime: 1.0,
            emission_shape: EmissionShape::default(),
            position: Vec2::ZERO,
            gravity: Vec2::ZERO,
            direction: Vec2::new(0.0, -1.0),
            spread: 0.0,
            speed: 0.0,
            start_scale: 1.0,
            end_scale: 1.0,
        }
    }

    // -- Builder pattern --

    pub fn with_oneshot(mut self, oneshot: bool) -> Self {
        self.oneshot = oneshot;
        self
    }

    pub fn with_lifetime(mut self, lifetime: f32) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_emission_shape(mut self, width: f32, height: f32) -> Self {
        self.emission_shape = EmissionShape::new(width, height);
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_spread(mut self, degrees: f32) -> Self {
        self.spread = degrees;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_scale(mut self, start: f32, end: f32) -> Self {
        self.start_scale = start;
        self.end_scale = end;
        self
    }
}

/// A single particle with physics and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub active: bool,
    texture: TextureHandle,
    oneshot: bool,
    start_lifetime: f32,
    lifetime: f32,
    emission_shape: EmissionShape,
    gravity: Vec2,
    acceleration: Vec2,
    start_position: Vec2,
    position: Vec2,
    velocity: Vec2,
    /// Angle of the base direction, radians.
    start_angle: f32,
    /// Full spread, radians.
    spread: f32,
    start_speed: f32,
    start_scale: f32,
    end_scale: f32,
    scale: f32,
}

impl Particle {
    /// Build an inactive particle with a freshly sampled spawn point and velocity.
    pub fn new(config: &ParticleConfig, rng: &mut Rng) -> Self {
        let mut p = Particle {
            active: false,
            texture: config.texture,
            oneshot: config.oneshot,
            start_lifetime: config.lifetime,
            lifetime: config.lifetime,
            emission_shape: config.emission_shape,
            gravity: config.gravity,
            acceleration: Vec2::ZERO,
            start_position: config.position,
            position: config.position,
            velocity: Vec2::ZERO,
            start_angle: config.direction.to_angle(),
            spread: to_radians(config.spread),
            start_speed: config.speed,
            start_scale: config.start_scale,
            end_scale: config.end_scale,
            scale: config.start_scale,
        };
        p.sample_velocity(rng);
        p.sample_position(rng);
        p
    }

    /// Advance by `dt` seconds, drawing to `surface` while alive.
    ///
    /// A recurring (non-oneshot) particle whose lifetime runs out is reset and
    /// re-armed in the same call.
    pub fn update(&mut self, dt: f32, rng: &mut Rng, surface: &mut dyn DrawSurface) {
        if !self.active {
            return;
        }

        self.lifetime -= dt;

        let t = map_value(self.lifetime, 0.0, self.start_lifetime, 0.0, 1.0);
        self.scale = lerp(self.start_scale, self.end_scale, 1.0 - t);

        if self.lifetime > 0.0 {
            self.acceleration += self.gravity;
            self.velocity += self.acceleration * dt;
            self.position = snap_to_pixel(self.position + self.velocity * dt);
            self.acceleration = Vec2::ZERO;

            self.draw(surface);
        } else {
            self.active = false;
            if !self.oneshot {
                self.reset(rng);
                self.active = true;
            }
        }
    }

    /// Re-sample spawn point and velocity around the current start position
    /// and restore lifetime and scale. Does not change `active`.
    pub fn reset(&mut self, rng: &mut Rng) {
        self.position = self.start_position;
        self.sample_position(rng);
        self.sample_velocity(rng);
        self.acceleration = Vec2::ZERO;
        self.lifetime = self.start_lifetime;
        self.scale = self.start_scale;
    }

    /// Blit the texture at the current position, scaled uniformly (dimensions rounded up).
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let size = Vec2::new(
            (self.texture.width * self.scale).ceil(),
            (self.texture.height * self.scale).ceil(),
        );
        surface.draw_image(self.texture, self.position, size);
    }

    /// Rebind the spawn origin used by the next `reset`. Does not move the particle.
    pub fn set_start_position(&mut self, position: Vec2) {
        self.start_position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn start_lifetime(&self) -> f32 {
        self.start_lifetime
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn start_scale(&self) -> f32 {
        self.start_scale
    }

    pub fn is_oneshot(&self) -> bool {
        self.oneshot
    }

    pub fn emission_shape(&self) -> EmissionShape {
        self.emission_shape
    }

    /// A one-shot particle whose lifetime has run out. Re-activating it draws nothing.
    pub fn is_spent(&self) -> bool {
        self.oneshot && self.lifetime <= 0.0
    }

    fn sample_velocity(&mut self, rng: &mut Rng) {
        let offset = rng.next_f32() * self.spread - self.spread / 2.0;
        self.velocity = Vec2::from_angle(self.start_angle + offset) * self.start_speed;
    }

    /// Pick a whole-pixel point inside the emission shape centered on the current position.
    fn sample_position(&mut self, rng: &mut Rng) {
        let center = self.position;
        let half = self.emission_shape.half_extents();
        self.position = Vec2::new(
            sample_axis(rng, center.x - half.x, center.x + half.x, center.x),
            sample_axis(rng, center.y - half.y, center.y + half.y, center.y),
        );
    }
}

/// Whole number in [lo, hi]; the center itself when no whole number fits.
fn sample_axis(rng: &mut Rng, lo: f32, hi: f32, center: f32) -> f32 {
    let (lo, hi) = (lo.ceil(), hi.floor());
    if lo > hi {
        return center;
    }
    rng.range_int(lo as i32, hi as i32) as f32
}
