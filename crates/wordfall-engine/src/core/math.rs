// core/math.rs
//
// Scalar helpers shared by particles and game logic.
// Vectors are plain glam::Vec2 values; these fill the gaps around them.

use glam::Vec2;

/// Linearly interpolate between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Remap `value` from `[old_min, old_max]` to `[new_min, new_max]`.
/// The input is clamped to the source range first, so the result never leaves the target range.
#[inline]
pub fn map_value(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    let value = value.max(old_min).min(old_max);
    let old_range = old_max - old_min;
    if old_range == 0.0 {
        return new_min;
    }
    (value - old_min) / old_range * (new_max - new_min) + new_min
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

/// Round both components to the nearest whole pixel.
#[inline]
pub fn snap_to_pixel(v: Vec2) -> Vec2 {
    v.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.5, 0.1, 0.0), 0.5);
        assert!((lerp(0.5, 0.1, 1.0) - 0.1).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn map_value_clamps_input() {
        assert_eq!(map_value(-1.0, 0.0, 0.2, 0.0, 1.0), 0.0);
        assert_eq!(map_value(5.0, 0.0, 0.2, 0.0, 1.0), 1.0);
        assert!((map_value(0.1, 0.0, 0.2, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn map_value_degenerate_range() {
        assert_eq!(map_value(3.0, 1.0, 1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn degree_radian_round_trip() {
        let r = to_radians(90.0);
        assert!((r - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((to_degrees(r) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn angle_helpers_agree() {
        let down = Vec2::new(0.0, 1.0);
        let angle = down.to_angle();
        let back = Vec2::from_angle(angle);
        assert!((back - down).length() < 1e-6);
    }

    #[test]
    fn snap_rounds_components() {
        assert_eq!(snap_to_pixel(Vec2::new(1.4, -2.6)), Vec2::new(1.0, -3.0));
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }
}
