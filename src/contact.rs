//! Contact data and collision events.

use glam::Vec2;

/// Canonical unordered kind pair. Each variant names its operands in the
/// order the matching narrow-phase test expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    PointRect,
    PointCircle,
    CircleCircle,
    RectCircle,
    RectRect,
    RayRay,
    RayRect,
    RayCircle,
}

/// Contact geometry for pair kinds that compute it.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Contact normal (from shape A to shape B).
    pub normal: Vec2,
    /// Penetration depth.
    pub penetration: f32,
}

/// One overlapping pair detected during a step.
///
/// `shape_a` and `shape_b` index the shape slice passed to
/// [`crate::PhysicsWorld::step`], in the canonical operand order for `pair`.
/// Events are emitted once per overlapping pair per frame and are not
/// persisted between frames.
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub shape_a: usize,
    pub shape_b: usize,
    pub pair: PairKind,
    /// Present only for pair kinds whose test computes contact geometry
    /// (currently circle-circle).
    pub contact: Option<Contact>,
}
