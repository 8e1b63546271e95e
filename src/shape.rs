//! Collision geometry records and per-kind accessors.

use glam::Vec2;

use crate::body::BodyId;

/// Shape kind tag. Fixed for the lifetime of a [`Shape`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A single point; `scale` is unused.
    Point,
    /// Axis-aligned rectangle; `scale` is its full width and height.
    Rect,
    /// Circle; `scale.x` is its diameter.
    Circle,
    /// Ray; `scale` is unused. Intersection tests are extension points, see
    /// [`crate::narrowphase`].
    Ray,
}

/// Collision geometry attached to a scene object.
///
/// A shape may exist without dynamics (a static wall): `owner` is an optional
/// back-reference into the body slice the host passes to
/// [`crate::PhysicsWorld::step`], never an ownership relation. Ownerless
/// shapes resolve as immovable.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub kind: ShapeKind,
    /// World-space position. For owned shapes this is re-synced from the
    /// owning body every step.
    pub position: Vec2,
    /// Geometry extents, reinterpreted per kind (see [`ShapeKind`]).
    pub scale: Vec2,
    /// Local offset from the owning body's position.
    pub offset: Vec2,
    /// Body this shape is attached to, if any.
    pub owner: Option<BodyId>,
}

impl Shape {
    fn new(kind: ShapeKind, position: Vec2, scale: Vec2) -> Self {
        Self {
            kind,
            position,
            scale,
            offset: Vec2::ZERO,
            owner: None,
        }
    }

    /// Create a point shape.
    pub fn point(position: Vec2) -> Self {
        Self::new(ShapeKind::Point, position, Vec2::ZERO)
    }

    /// Create an axis-aligned rectangle with the given full width and height.
    pub fn rect(position: Vec2, size: Vec2) -> Self {
        Self::new(ShapeKind::Rect, position, size)
    }

    /// Create a circle with the given diameter.
    pub fn circle(position: Vec2, diameter: f32) -> Self {
        Self::new(ShapeKind::Circle, position, Vec2::splat(diameter))
    }

    /// Create a ray anchored at `position`.
    pub fn ray(position: Vec2) -> Self {
        Self::new(ShapeKind::Ray, position, Vec2::ZERO)
    }

    /// Attach this shape to a body.
    pub fn with_owner(mut self, owner: BodyId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Offset this shape from its owning body's position.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Circle radius: half the x extent.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.scale.x / 2.0
    }

    /// Rectangle half width and height.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.scale * 0.5
    }

    /// Whether the rectangle spans a positive area on both axes.
    #[inline]
    pub fn has_extent(&self) -> bool {
        self.scale.x > 0.0 && self.scale.y > 0.0
    }

    /// Axis-aligned bounds: position ± scale/2 on each axis.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        let half = self.half_extents();
        Aabb {
            min: self.position - half,
            max: self.position + half,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Test whether two AABBs overlap. Touching edges count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Test whether a point lies inside the box, bounds inclusive.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Clamp a point to the box on each axis: the closest point inside.
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}
