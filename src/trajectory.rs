//! Aim-to-launch conversion and parabolic path sampling.
//!
//! Pure kinematics for trajectory previews: the pointer input that feeds the
//! aim target and the line rendering of the sampled arc both stay on the
//! host side. Uses the same equations the integrator applies stepwise,
//! `p = p0 + v0*t + 0.5*g*t^2`, in closed form.

use glam::Vec2;

/// Default downward gravity for previews without a body to read from.
pub const STANDARD_GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

/// Unit direction from `origin` toward `target`, or `None` when the two
/// coincide (a zero-length aim vector cannot be normalized).
pub fn aim_direction(origin: Vec2, target: Vec2) -> Option<Vec2> {
    (target - origin).try_normalize()
}

/// Launch angle in radians, measured from straight up, negative toward +X.
/// Matches a launcher sprite rotating toward the pointer.
pub fn launch_angle(origin: Vec2, target: Vec2) -> Option<f32> {
    aim_direction(origin, target).map(|dir| -dir.x.atan2(dir.y))
}

/// Initial velocity for a launch of the given power toward `target`.
pub fn launch_velocity(origin: Vec2, target: Vec2, power: f32) -> Option<Vec2> {
    aim_direction(origin, target).map(|dir| dir * power)
}

/// Position along a parabolic arc at time `t`.
pub fn position_at(origin: Vec2, velocity: Vec2, gravity: Vec2, t: f32) -> Vec2 {
    origin + velocity * t + 0.5 * gravity * t * t
}

/// Sample `samples` points along the arc, evenly spaced over `duration`
/// seconds starting at `t = 0`.
pub fn sample_arc(
    origin: Vec2,
    velocity: Vec2,
    gravity: Vec2,
    duration: f32,
    samples: usize,
) -> Vec<Vec2> {
    if samples == 0 {
        return Vec::new();
    }
    let last = (samples - 1).max(1) as f32;
    (0..samples)
        .map(|i| position_at(origin, velocity, gravity, duration * i as f32 / last))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_direction_zero_length_guarded() {
        assert_eq!(aim_direction(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_launch_velocity_scales_direction() {
        let velocity = launch_velocity(Vec2::ZERO, Vec2::new(0.0, 10.0), 5.0).unwrap();
        assert!((velocity - Vec2::new(0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_launch_angle() {
        let eps = 1e-5;
        // Straight up: zero angle
        assert!(launch_angle(Vec2::ZERO, Vec2::new(0.0, 1.0)).unwrap().abs() < eps);
        // Straight right: quarter turn toward +X
        let angle = launch_angle(Vec2::ZERO, Vec2::new(1.0, 0.0)).unwrap();
        assert!((angle + std::f32::consts::FRAC_PI_2).abs() < eps);
    }

    #[test]
    fn test_position_at_closed_form() {
        let p = position_at(
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(0.0, -2.0),
            2.0,
        );
        // 1 + 3*2, 2 + 4*2 - 0.5*2*4
        assert!((p - Vec2::new(7.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_gravity_arc_is_straight() {
        let points = sample_arc(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::ZERO, 2.0, 5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Vec2::ZERO);
        assert!((points[4] - Vec2::new(2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_arc_returns_to_launch_height() {
        // Vertical throw: back at the start height after t = 2*v/g.
        let velocity = Vec2::new(0.0, 9.81);
        let t_flight = 2.0 * velocity.y / 9.81;
        let p = position_at(Vec2::ZERO, velocity, STANDARD_GRAVITY, t_flight);
        assert!(p.y.abs() < 1e-3);
    }

    #[test]
    fn test_sample_arc_empty() {
        assert!(sample_arc(Vec2::ZERO, Vec2::ONE, STANDARD_GRAVITY, 1.0, 0).is_empty());
    }
}
