//! Dynamics state and the per-frame integration passes.

use glam::Vec2;

use crate::shape::Shape;

/// Index of a body in the slice the host passes to
/// [`crate::PhysicsWorld::step`]. A weak handle, not an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyId(pub usize);

/// Dynamics state of a scene object.
///
/// Owned by the scene entity it animates; the simulation mutates it in place
/// and never creates or destroys one.
#[derive(Debug, Clone)]
pub struct Body {
    /// World-space position, written back by the integrator and the resolver.
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Per-body gravity, added to acceleration each velocity pass.
    pub gravity: Vec2,
    /// Must stay positive: resolution divides by combined mass.
    pub mass: f32,
    /// Coefficient of restitution. Unused by positional correction; reserved
    /// for an impulse-based response model.
    pub restitution: f32,
}

impl Body {
    /// Create a body at the origin with the given mass and no motion.
    pub fn new(mass: f32) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive, got {mass}");
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            gravity: Vec2::ZERO,
            mass,
            restitution: 1.0,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// 1/mass, or zero for a non-positive mass.
    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }
}

/// First pass: `velocity += (acceleration + gravity) * dt` for every body.
pub fn integrate_velocities(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.velocity += (body.acceleration + body.gravity) * dt;
    }
}

/// Second pass: `position += velocity * dt` for every body.
///
/// Runs over the whole slice after [`integrate_velocities`] has finished, so
/// every position update sees this tick's final velocities.
pub fn integrate_positions(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.position += body.velocity * dt;
    }
}

/// Advance velocities, then positions, as two separated passes.
///
/// A zero or negative `dt` is accepted and produces zero or reversed motion;
/// supplying a sane timestep is the caller's concern.
pub fn integrate(bodies: &mut [Body], dt: f32) {
    integrate_velocities(bodies, dt);
    integrate_positions(bodies, dt);
}

/// Copy each owned shape's position from its body (plus the shape's offset).
///
/// A shape whose owner index is out of bounds is left where it is and logged,
/// behaving like an ownerless shape for the rest of the step.
pub fn sync_owned_shapes(bodies: &[Body], shapes: &mut [Shape]) {
    for (index, shape) in shapes.iter_mut().enumerate() {
        let Some(BodyId(owner)) = shape.owner else {
            continue;
        };
        match bodies.get(owner) {
            Some(body) => shape.position = body.position + shape.offset,
            None => tracing::warn!(shape = index, body = owner, "shape owner out of bounds"),
        }
    }
}
