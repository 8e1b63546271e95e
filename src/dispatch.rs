//! All-pairs enumeration and narrow-phase dispatch.

use crate::contact::{CollisionEvent, Contact, PairKind};
use crate::narrowphase;
use crate::shape::{Shape, ShapeKind};

/// Classify an ordered kind pair into its canonical [`PairKind`].
///
/// The returned flag is true when the operands must swap to match the
/// canonical order the narrow-phase test expects (symmetric pairs never
/// swap). Kind combinations with no registered test return `None` and are
/// skipped by [`dispatch`].
pub fn classify(a: ShapeKind, b: ShapeKind) -> Option<(PairKind, bool)> {
    use ShapeKind::{Circle, Point, Ray, Rect};

    Some(match (a, b) {
        (Point, Rect) => (PairKind::PointRect, false),
        (Rect, Point) => (PairKind::PointRect, true),
        (Point, Circle) => (PairKind::PointCircle, false),
        (Circle, Point) => (PairKind::PointCircle, true),
        (Circle, Circle) => (PairKind::CircleCircle, false),
        (Rect, Circle) => (PairKind::RectCircle, false),
        (Circle, Rect) => (PairKind::RectCircle, true),
        (Rect, Rect) => (PairKind::RectRect, false),
        (Ray, Ray) => (PairKind::RayRay, false),
        (Ray, Rect) => (PairKind::RayRect, false),
        (Rect, Ray) => (PairKind::RayRect, true),
        (Ray, Circle) => (PairKind::RayCircle, false),
        (Circle, Ray) => (PairKind::RayCircle, true),
        (Point, Point) | (Point, Ray) | (Ray, Point) => return None,
    })
}

/// Enumerate all unordered shape pairs `{i < j}` and run the matching
/// narrow-phase test on each, returning an event per overlapping pair.
///
/// O(n²) brute force; there is no broad-phase pruning. Event indices are in
/// the canonical operand order for the pair's test.
pub fn dispatch(shapes: &[Shape]) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            let Some((pair, swap)) = classify(shapes[i].kind, shapes[j].kind) else {
                continue;
            };
            let (a, b) = if swap { (j, i) } else { (i, j) };

            // Outer None: no overlap. Inner option: contact geometry, for the
            // tests that compute it.
            let (first, second) = (&shapes[a], &shapes[b]);
            let hit: Option<Option<Contact>> = match pair {
                PairKind::PointRect => narrowphase::point_rect(first, second).then_some(None),
                PairKind::PointCircle => narrowphase::point_circle(first, second).then_some(None),
                PairKind::CircleCircle => narrowphase::circle_circle(first, second).map(Some),
                PairKind::RectCircle => narrowphase::rect_circle(first, second).then_some(None),
                PairKind::RectRect => narrowphase::rect_rect(first, second).then_some(None),
                PairKind::RayRay => narrowphase::ray_ray(first, second).then_some(None),
                PairKind::RayRect => narrowphase::ray_rect(first, second).then_some(None),
                PairKind::RayCircle => narrowphase::ray_circle(first, second).then_some(None),
            };

            if let Some(contact) = hit {
                tracing::trace!(?pair, shape_a = a, shape_b = b, "overlap detected");
                events.push(CollisionEvent {
                    shape_a: a,
                    shape_b: b,
                    pair,
                    contact,
                });
            }
        }
    }

    events
}
