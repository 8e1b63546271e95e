//! The per-frame simulation step.

use crate::body::{self, Body};
use crate::contact::CollisionEvent;
use crate::dispatch;
use crate::resolver;
use crate::shape::Shape;

/// The simulation entry point a host calls once per frame tick.
///
/// The world owns no scene state: bodies and shapes are passed in each tick
/// and mutated in place, only the event buffer of the most recent step lives
/// here. A step must not be re-entered on the same scene while one is in
/// flight; `&mut self` enforces this.
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    events: Vec<CollisionEvent>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Fixed order: integrate velocities, integrate positions, sync owned
    /// shapes, detect overlapping pairs, resolve them. Returns the overlaps
    /// detected this tick; events are not persisted between frames.
    ///
    /// Never fails: degenerate masses, unsupported kind pairs, and degenerate
    /// geometry are handled locally (see [`crate::narrowphase`] and
    /// [`crate::resolver`]). A zero or negative `dt` simply produces zero or
    /// reversed motion.
    pub fn step(&mut self, bodies: &mut [Body], shapes: &mut [Shape], dt: f32) -> &[CollisionEvent] {
        body::integrate(bodies, dt);
        body::sync_owned_shapes(bodies, shapes);

        self.events = dispatch::dispatch(shapes);
        for event in &self.events {
            resolver::resolve(event, bodies, shapes);
        }

        tracing::debug!(
            bodies = bodies.len(),
            shapes = shapes.len(),
            events = self.events.len(),
            "step complete"
        );
        &self.events
    }

    /// Overlaps detected by the most recent step.
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }
}
