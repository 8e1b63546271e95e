//! Opt-in scene validation for hosts.

use thiserror::Error;

use crate::body::{Body, BodyId};
use crate::shape::{Shape, ShapeKind};

/// Scene-setup mistakes surfaced by [`validate`].
///
/// None of these are fatal to the simulation itself:
/// [`crate::PhysicsWorld::step`] tolerates all of them locally by skipping
/// the affected shape or pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f32 },

    #[error("shape {shape} is owned by body {body}, but only {bodies} bodies were supplied")]
    DanglingOwner { shape: usize, body: usize, bodies: usize },

    #[error("shape {index} has degenerate geometry ({width}x{height}) and will never overlap")]
    DegenerateGeometry { index: usize, width: f32, height: f32 },
}

/// Check a body/shape set for common setup mistakes, returning the first one
/// found. Useful in host debug builds before handing the scene to
/// [`crate::PhysicsWorld::step`]; the step itself never calls this.
pub fn validate(bodies: &[Body], shapes: &[Shape]) -> Result<(), SceneError> {
    for (index, body) in bodies.iter().enumerate() {
        if body.mass <= 0.0 {
            return Err(SceneError::NonPositiveMass {
                index,
                mass: body.mass,
            });
        }
    }

    for (index, shape) in shapes.iter().enumerate() {
        if let Some(BodyId(body)) = shape.owner {
            if body >= bodies.len() {
                return Err(SceneError::DanglingOwner {
                    shape: index,
                    body,
                    bodies: bodies.len(),
                });
            }
        }

        let degenerate = match shape.kind {
            ShapeKind::Circle => shape.radius() <= 0.0,
            ShapeKind::Rect => !shape.has_extent(),
            ShapeKind::Point | ShapeKind::Ray => false,
        };
        if degenerate {
            return Err(SceneError::DegenerateGeometry {
                index,
                width: shape.scale.x,
                height: shape.scale.y,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_validate_ok() {
        let bodies = vec![Body::new(1.0)];
        let shapes = vec![
            Shape::circle(Vec2::ZERO, 2.0).with_owner(BodyId(0)),
            Shape::rect(Vec2::ZERO, Vec2::new(2.0, 2.0)),
            Shape::point(Vec2::ZERO),
            Shape::ray(Vec2::ZERO),
        ];
        assert_eq!(validate(&bodies, &shapes), Ok(()));
    }

    #[test]
    fn test_validate_non_positive_mass() {
        let mut body = Body::new(1.0);
        body.mass = 0.0;
        assert_eq!(
            validate(&[body], &[]),
            Err(SceneError::NonPositiveMass { index: 0, mass: 0.0 })
        );
    }

    #[test]
    fn test_validate_dangling_owner() {
        let shapes = vec![Shape::circle(Vec2::ZERO, 2.0).with_owner(BodyId(3))];
        assert_eq!(
            validate(&[], &shapes),
            Err(SceneError::DanglingOwner {
                shape: 0,
                body: 3,
                bodies: 0
            })
        );
    }

    #[test]
    fn test_validate_degenerate_geometry() {
        let shapes = vec![Shape::circle(Vec2::ZERO, 0.0)];
        assert!(matches!(
            validate(&[], &shapes),
            Err(SceneError::DegenerateGeometry { index: 0, .. })
        ));

        let shapes = vec![Shape::rect(Vec2::ZERO, Vec2::new(2.0, 0.0))];
        assert!(matches!(
            validate(&[], &shapes),
            Err(SceneError::DegenerateGeometry { index: 0, .. })
        ));
    }

    #[test]
    fn test_points_and_rays_ignore_scale() {
        // Points and rays carry no extent; zero scale is their normal state.
        let shapes = vec![Shape::point(Vec2::ZERO), Shape::ray(Vec2::ZERO)];
        assert_eq!(validate(&[], &shapes), Ok(()));
    }
}
