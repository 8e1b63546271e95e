//! 2D rigid body simulation core.
//!
//! Per-frame integration of velocity and position for physics bodies,
//! brute-force all-pairs collision detection across heterogeneous shape
//! kinds (point, axis-aligned rectangle, circle, ray), and mass-weighted
//! positional correction for overlapping circles.
//!
//! # Architecture
//!
//! Each call to [`PhysicsWorld::step`] runs a fixed pipeline:
//!
//! 1. Integrate velocities (acceleration + per-body gravity)
//! 2. Integrate positions (separate pass)
//! 3. Sync owned shapes to their bodies
//! 4. All-pairs narrow-phase dispatch (O(n²), no broad phase)
//! 5. Resolve overlaps (positional correction, circle-circle only)
//!
//! The host owns the scene: [`Body`] and [`Shape`] records are passed in as
//! slices each tick and mutated in place, and the returned
//! [`CollisionEvent`]s are consumed by game logic or visual feedback. The
//! core performs no rendering, input handling, or scene lookup of its own.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use lob::{Body, BodyId, PhysicsWorld, Shape};
//!
//! let mut bodies = vec![Body::new(1.0)
//!     .with_position(Vec2::new(0.0, 5.0))
//!     .with_gravity(Vec2::new(0.0, -9.81))];
//! let mut shapes = vec![
//!     Shape::circle(Vec2::ZERO, 1.0).with_owner(BodyId(0)),
//!     Shape::rect(Vec2::new(0.0, -1.0), Vec2::new(10.0, 1.0)),
//! ];
//!
//! let mut world = PhysicsWorld::new();
//! for event in world.step(&mut bodies, &mut shapes, 1.0 / 60.0) {
//!     println!("shapes {} and {} overlap", event.shape_a, event.shape_b);
//! }
//! ```

pub mod body;
pub mod contact;
pub mod dispatch;
pub mod error;
pub mod narrowphase;
pub mod resolver;
pub mod shape;
pub mod trajectory;
pub mod world;

pub use body::{Body, BodyId};
pub use contact::{CollisionEvent, Contact, PairKind};
pub use error::{validate, SceneError};
pub use shape::{Aabb, Shape, ShapeKind};
pub use world::PhysicsWorld;

// Re-export glam for convenience
pub use glam;
