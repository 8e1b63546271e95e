//! Positional correction for detected overlaps.

use glam::Vec2;

use crate::body::{Body, BodyId};
use crate::contact::{CollisionEvent, Contact, PairKind};
use crate::shape::Shape;

/// Apply the resolution policy for one detected overlap.
///
/// Circle-circle pairs get mass-weighted positional correction along the
/// contact normal. Every other pair kind is detection-only: the event is the
/// whole response, and positions stay untouched.
pub fn resolve(event: &CollisionEvent, bodies: &mut [Body], shapes: &mut [Shape]) {
    match event.pair {
        PairKind::CircleCircle => {
            if let Some(contact) = event.contact {
                separate_circles(event, contact, bodies, shapes);
            }
        }
        PairKind::PointRect
        | PairKind::PointCircle
        | PairKind::RectCircle
        | PairKind::RectRect
        | PairKind::RayRay
        | PairKind::RayRect
        | PairKind::RayCircle => {}
    }
}

/// Displace both circles along the contact normal, split in inverse
/// proportion to their owners' masses: the heavier body moves less, an
/// ownerless shape (infinite mass) not at all.
fn separate_circles(
    event: &CollisionEvent,
    contact: Contact,
    bodies: &mut [Body],
    shapes: &mut [Shape],
) {
    let inverse_a = owner_inverse_mass(&shapes[event.shape_a], bodies);
    let inverse_b = owner_inverse_mass(&shapes[event.shape_b], bodies);

    let combined = inverse_a + inverse_b;
    if combined <= 0.0 {
        // Two immovable shapes: nothing to displace.
        tracing::trace!(
            shape_a = event.shape_a,
            shape_b = event.shape_b,
            "degenerate combined mass, skipping correction"
        );
        return;
    }

    let correction = contact.normal * contact.penetration;
    displace(event.shape_a, -correction * (inverse_a / combined), bodies, shapes);
    displace(event.shape_b, correction * (inverse_b / combined), bodies, shapes);
}

/// Inverse mass of the shape's owning body; zero (immovable) when the shape
/// has no owner or the owner index is out of bounds.
fn owner_inverse_mass(shape: &Shape, bodies: &[Body]) -> f32 {
    shape
        .owner
        .and_then(|BodyId(owner)| bodies.get(owner))
        .map_or(0.0, Body::inverse_mass)
}

/// Move a shape and write the new position back through its owning body,
/// keeping body and shape consistent for the rest of the frame.
fn displace(index: usize, delta: Vec2, bodies: &mut [Body], shapes: &mut [Shape]) {
    let shape = &mut shapes[index];
    shape.position += delta;

    if let Some(BodyId(owner)) = shape.owner {
        if let Some(body) = bodies.get_mut(owner) {
            body.position = shape.position - shape.offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch;

    fn overlapping_circles(mass_a: f32, mass_b: f32) -> (Vec<Body>, Vec<Shape>) {
        let bodies = vec![
            Body::new(mass_a).with_position(Vec2::ZERO),
            Body::new(mass_b).with_position(Vec2::new(1.0, 0.0)),
        ];
        let shapes = vec![
            Shape::circle(Vec2::ZERO, 2.0).with_owner(BodyId(0)),
            Shape::circle(Vec2::new(1.0, 0.0), 2.0).with_owner(BodyId(1)),
        ];
        (bodies, shapes)
    }

    #[test]
    fn test_equal_mass_split() {
        // Radius-1 circles at center distance 1: penetration 1, each side
        // moves 0.5, restoring the distance to 2.
        let (mut bodies, mut shapes) = overlapping_circles(1.0, 1.0);
        let events = dispatch::dispatch(&shapes);
        assert_eq!(events.len(), 1);

        resolve(&events[0], &mut bodies, &mut shapes);

        let eps = 1e-5;
        assert!((shapes[0].position - Vec2::new(-0.5, 0.0)).length() < eps);
        assert!((shapes[1].position - Vec2::new(1.5, 0.0)).length() < eps);
        assert!((shapes[0].position.distance(shapes[1].position) - 2.0).abs() < eps);
    }

    #[test]
    fn test_mass_weighted_split() {
        // Mass 1 vs mass 3 with penetration 1: the light circle moves 0.75,
        // the heavy one 0.25.
        let (mut bodies, mut shapes) = overlapping_circles(1.0, 3.0);
        let events = dispatch::dispatch(&shapes);

        resolve(&events[0], &mut bodies, &mut shapes);

        let eps = 1e-5;
        assert!((shapes[0].position - Vec2::new(-0.75, 0.0)).length() < eps);
        assert!((shapes[1].position - Vec2::new(1.25, 0.0)).length() < eps);
    }

    #[test]
    fn test_ownerless_circle_is_immovable() {
        let mut bodies = vec![Body::new(1.0).with_position(Vec2::ZERO)];
        let mut shapes = vec![
            Shape::circle(Vec2::ZERO, 2.0).with_owner(BodyId(0)),
            Shape::circle(Vec2::new(1.0, 0.0), 2.0),
        ];
        let events = dispatch::dispatch(&shapes);

        resolve(&events[0], &mut bodies, &mut shapes);

        let eps = 1e-5;
        // The dynamic circle absorbs the full penetration depth.
        assert!((shapes[0].position - Vec2::new(-1.0, 0.0)).length() < eps);
        assert_eq!(shapes[1].position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_degenerate_mass_skipped() {
        // Two ownerless circles: combined inverse mass is zero; no division,
        // no displacement.
        let mut bodies: Vec<Body> = Vec::new();
        let mut shapes = vec![
            Shape::circle(Vec2::ZERO, 2.0),
            Shape::circle(Vec2::new(1.0, 0.0), 2.0),
        ];
        let events = dispatch::dispatch(&shapes);
        assert_eq!(events.len(), 1);

        resolve(&events[0], &mut bodies, &mut shapes);

        assert_eq!(shapes[0].position, Vec2::ZERO);
        assert_eq!(shapes[1].position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_correction_written_back_to_bodies() {
        let (mut bodies, mut shapes) = overlapping_circles(1.0, 1.0);
        let events = dispatch::dispatch(&shapes);

        resolve(&events[0], &mut bodies, &mut shapes);

        let eps = 1e-5;
        assert!((bodies[0].position - Vec2::new(-0.5, 0.0)).length() < eps);
        assert!((bodies[1].position - Vec2::new(1.5, 0.0)).length() < eps);
    }

    #[test]
    fn test_detection_only_pairs_not_resolved() {
        let mut bodies: Vec<Body> = Vec::new();
        let mut shapes = vec![
            Shape::rect(Vec2::ZERO, Vec2::new(2.0, 2.0)),
            Shape::rect(Vec2::new(1.0, 0.0), Vec2::new(2.0, 2.0)),
        ];
        let events = dispatch::dispatch(&shapes);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].pair, PairKind::RectRect);

        resolve(&events[0], &mut bodies, &mut shapes);

        assert_eq!(shapes[0].position, Vec2::ZERO);
        assert_eq!(shapes[1].position, Vec2::new(1.0, 0.0));
    }
}
