//! Narrow-phase shape-pair tests.
//!
//! Every geometric test is implemented exactly once, assuming its operands in
//! canonical order; [`crate::dispatch`] swaps them when needed. Boundary
//! semantics differ per pair: point and rectangle containment and
//! circle-circle are inclusive (touching counts as overlapping), while the
//! rectangle-circle test is strict.

use glam::Vec2;

use crate::contact::Contact;
use crate::shape::Shape;

/// Below this center separation the contact direction is degenerate.
const NORMAL_EPSILON: f32 = 1e-6;
/// Fallback normal for coincident circle centers.
const DEGENERATE_NORMAL: Vec2 = Vec2::Y;

/// Point inside axis-aligned rectangle, bounds inclusive.
pub fn point_rect(point: &Shape, rect: &Shape) -> bool {
    if !rect.has_extent() {
        return false;
    }
    rect.bounds().contains(point.position)
}

/// Point inside circle: distance to the center at most the radius.
pub fn point_circle(point: &Shape, circle: &Shape) -> bool {
    let radius = circle.radius();
    if radius <= 0.0 {
        return false;
    }
    point.position.distance(circle.position) <= radius
}

/// Circle-circle overlap: center distance at most the combined radii.
///
/// Returns the contact normal (from `a` to `b`) and penetration depth
/// `(rA + rB) - distance` for the resolver.
pub fn circle_circle(a: &Shape, b: &Shape) -> Option<Contact> {
    let (radius_a, radius_b) = (a.radius(), b.radius());
    if radius_a <= 0.0 || radius_b <= 0.0 {
        return None;
    }

    let delta = b.position - a.position;
    let distance = delta.length();
    let combined = radius_a + radius_b;
    if distance > combined {
        return None;
    }

    let normal = if distance > NORMAL_EPSILON {
        delta / distance
    } else {
        DEGENERATE_NORMAL
    };

    Some(Contact {
        normal,
        penetration: combined - distance,
    })
}

/// Circle against axis-aligned rectangle: clamp the circle's center to the
/// rectangle's bounds per axis, then compare the distance to the closest
/// point against the radius (strictly less; touching is not overlapping).
pub fn rect_circle(rect: &Shape, circle: &Shape) -> bool {
    let radius = circle.radius();
    if radius <= 0.0 || !rect.has_extent() {
        return false;
    }
    let closest = rect.bounds().closest_point(circle.position);
    closest.distance(circle.position) < radius
}

/// Axis-aligned rectangle overlap: interval overlap on both axes.
pub fn rect_rect(a: &Shape, b: &Shape) -> bool {
    if !a.has_extent() || !b.has_extent() {
        return false;
    }
    a.bounds().overlaps(&b.bounds())
}

/// Ray-ray intersection. Extension point: a ray carries no direction in the
/// data model yet, so no geometry is computable and the pair never overlaps.
pub fn ray_ray(_a: &Shape, _b: &Shape) -> bool {
    false
}

/// Ray against axis-aligned rectangle. Extension point, see [`ray_ray`].
pub fn ray_rect(_ray: &Shape, _rect: &Shape) -> bool {
    false
}

/// Ray against circle. Extension point, see [`ray_ray`].
pub fn ray_circle(_ray: &Shape, _circle: &Shape) -> bool {
    false
}
