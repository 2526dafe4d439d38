use glam::Vec2;

use crate::api::CollisionBody;
use crate::geometry::{clamp_vec, distance};

/// Separating-axis overlap test for two rectangular bodies.
///
/// Pure predicate, no side effects; safe to call at any rate. Overlap
/// requires strictly negative penetration on both axes, so edge-touching
/// bodies do not collide.
pub fn overlaps(a: &dyn CollisionBody, b: &dyn CollisionBody) -> bool {
    let delta = b.position() - a.position();
    let extent = a.half_size() + b.half_size();

    let intersect_x = delta.x.abs() - extent.x;
    let intersect_y = delta.y.abs() - extent.y;

    intersect_x < 0.0 && intersect_y < 0.0
}

/// Detect and resolve overlap between two rectangular bodies.
///
/// On overlap, pushes the bodies apart along the axis of least penetration
/// until exactly separated and returns a unit direction hint for collision
/// response (e.g. "landed on top"). `push` is clamped to `[0, 1]` and sets
/// the split: `b` moves by `penetration * push`, `a` by
/// `penetration * (1 - push)` in the opposite sense.
///
/// Equal per-axis penetration resolves along Y; this tie-break is defined
/// behavior. On the Y axis the hint sign is inverted relative to the
/// positional delta (screen-coordinate convention: `b` below `a` yields
/// `(0, -1)`).
///
/// Returns `None` and leaves both bodies untouched when they are separated.
pub fn resolve(
    a: &mut dyn CollisionBody,
    b: &mut dyn CollisionBody,
    push: f32,
) -> Option<Vec2> {
    let delta = b.position() - a.position();
    let extent = a.half_size() + b.half_size();

    let intersect_x = delta.x.abs() - extent.x;
    let intersect_y = delta.y.abs() - extent.y;

    if intersect_x >= 0.0 || intersect_y >= 0.0 {
        return None;
    }
    let push = push.clamp(0.0, 1.0);

    // Both intersect values are negative here; the larger one marks the
    // axis of least penetration, which is the axis we separate along.
    let direction = if intersect_x > intersect_y {
        if delta.x > 0.0 {
            a.translate(Vec2::new(intersect_x * (1.0 - push), 0.0));
            b.translate(Vec2::new(-intersect_x * push, 0.0));
            Vec2::new(1.0, 0.0)
        } else {
            a.translate(Vec2::new(-intersect_x * (1.0 - push), 0.0));
            b.translate(Vec2::new(intersect_x * push, 0.0));
            Vec2::new(-1.0, 0.0)
        }
    } else if delta.y < 0.0 {
        a.translate(Vec2::new(0.0, -intersect_y * (1.0 - push)));
        b.translate(Vec2::new(0.0, intersect_y * push));
        Vec2::new(0.0, 1.0)
    } else {
        a.translate(Vec2::new(0.0, intersect_y * (1.0 - push)));
        b.translate(Vec2::new(0.0, -intersect_y * push));
        Vec2::new(0.0, -1.0)
    };
    Some(direction)
}

/// Circular body: epicenter plus radius, immutable after construction.
/// Detection only; nothing resolves against a circle.
#[derive(Copy, Clone, Debug)]
pub struct CollisionCircle {
    epicenter: Vec2,
    radius: f32,
}

impl CollisionCircle {
    pub fn new(epicenter: Vec2, radius: f32) -> Self {
        Self { epicenter, radius }
    }

    pub fn epicenter(&self) -> Vec2 {
        self.epicenter
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// True iff the center distance is strictly less than the radius sum.
    /// Tangent circles do not collide.
    pub fn overlaps_circle(&self, other: &CollisionCircle) -> bool {
        distance(self.epicenter, other.epicenter) < self.radius + other.radius
    }

    /// True iff the closest point on the body's box lies strictly inside
    /// the circle.
    pub fn overlaps_body(&self, body: &dyn CollisionBody) -> bool {
        let top_left = body.position() - body.half_size();
        let bottom_right = body.position() + body.half_size();
        let closest = clamp_vec(self.epicenter, top_left, bottom_right);

        distance(closest, self.epicenter) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::RectShape;

    fn unit_box(x: f32, y: f32) -> RectShape {
        RectShape::new(Vec2::new(x, y), Vec2::splat(2.0))
    }

    #[test]
    fn test_overlaps_separated_and_touching() {
        let a = unit_box(0.0, 0.0);
        assert!(!overlaps(&a, &unit_box(3.0, 0.0)));
        // Exactly edge-touching: strict inequality, no collision
        assert!(!overlaps(&a, &unit_box(2.0, 0.0)));
        assert!(overlaps(&a, &unit_box(1.9, 0.0)));
    }

    #[test]
    fn test_resolve_no_overlap_leaves_positions() {
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(5.0, 5.0);
        assert!(resolve(&mut a, &mut b, 0.5).is_none());
        assert_eq!(a.position(), Vec2::new(0.0, 0.0));
        assert_eq!(b.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_resolve_push_one_moves_only_b() {
        // A at origin, B at (1.5, 0): x penetration 0.5, push = 1.0
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(1.5, 0.0);
        let dir = resolve(&mut a, &mut b, 1.0).unwrap();
        assert!((dir.x - 1.0).abs() < 1e-5);
        assert!(dir.y.abs() < 1e-5);
        assert_eq!(a.position(), Vec2::new(0.0, 0.0));
        assert!((b.position().x - 2.0).abs() < 1e-5);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_resolve_push_zero_moves_only_a() {
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(1.5, 0.0);
        resolve(&mut a, &mut b, 0.0).unwrap();
        assert_eq!(b.position(), Vec2::new(1.5, 0.0));
        assert!((a.position().x + 0.5).abs() < 1e-5);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_resolve_push_half_splits_evenly() {
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(1.5, 0.0);
        resolve(&mut a, &mut b, 0.5).unwrap();
        assert!((a.position().x + 0.25).abs() < 1e-5);
        assert!((b.position().x - 1.75).abs() < 1e-5);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_resolve_separates_for_any_push() {
        for push in [0.0, 0.25, 0.5, 0.75, 1.0, -3.0, 7.0] {
            let mut a = unit_box(0.2, -0.1);
            let mut b = unit_box(1.0, 0.9);
            assert!(resolve(&mut a, &mut b, push).is_some());
            assert!(!overlaps(&a, &b), "residual overlap at push {push}");
        }
    }

    #[test]
    fn test_resolve_y_axis_direction_signs() {
        // B below A (positive delta y): hint is (0, -1)
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(0.0, 1.5);
        let dir = resolve(&mut a, &mut b, 1.0).unwrap();
        assert_eq!(dir, Vec2::new(0.0, -1.0));
        assert!((b.position().y - 2.0).abs() < 1e-5);

        // B above A: hint is (0, 1)
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(0.0, -1.5);
        let dir = resolve(&mut a, &mut b, 1.0).unwrap();
        assert_eq!(dir, Vec2::new(0.0, 1.0));
        assert!((b.position().y + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_resolve_equal_penetration_ties_to_y() {
        // Perfectly diagonal overlap: intersect_x == intersect_y
        let mut a = unit_box(0.0, 0.0);
        let mut b = unit_box(1.5, 1.5);
        let dir = resolve(&mut a, &mut b, 1.0).unwrap();
        assert!(dir.x.abs() < 1e-5);
        assert!((dir.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_resolve_mixed_body_kinds() {
        use crate::body::Sprite;
        use crate::types::TextureRect;

        let mut wall = unit_box(0.0, 0.0);
        let mut player = Sprite::new(Vec2::new(1.0, 0.0), TextureRect::new(2, 2));
        assert!(resolve(&mut wall, &mut player, 1.0).is_some());
        assert!(!overlaps(&wall, &player));
    }

    #[test]
    fn test_circle_circle_commutative_and_strict() {
        let a = CollisionCircle::new(Vec2::new(0.0, 0.0), 1.0);
        let b = CollisionCircle::new(Vec2::new(1.5, 0.0), 1.0);
        assert!(a.overlaps_circle(&b));
        assert!(b.overlaps_circle(&a));

        // Tangent: distance equals radius sum, strict test says no
        let c = CollisionCircle::new(Vec2::new(2.0, 0.0), 1.0);
        assert!(!a.overlaps_circle(&c));
        assert!(!c.overlaps_circle(&a));
    }

    #[test]
    fn test_circle_circle_coincident_centers() {
        let a = CollisionCircle::new(Vec2::new(3.0, 3.0), 0.5);
        let b = CollisionCircle::new(Vec2::new(3.0, 3.0), 0.1);
        assert!(a.overlaps_circle(&b));
    }

    #[test]
    fn test_circle_box_detection() {
        let boxy = unit_box(0.0, 0.0);
        // Closest point on the box to (2.5, 0) is (1, 0), distance 1.5
        assert!(!CollisionCircle::new(Vec2::new(2.5, 0.0), 1.0).overlaps_body(&boxy));
        assert!(CollisionCircle::new(Vec2::new(2.5, 0.0), 1.6).overlaps_body(&boxy));
        // Epicenter inside the box
        assert!(CollisionCircle::new(Vec2::new(0.2, 0.3), 0.1).overlaps_body(&boxy));
        // Corner approach: closest point is the corner itself
        assert!(!CollisionCircle::new(Vec2::new(2.0, 2.0), 1.0).overlaps_body(&boxy));
        assert!(CollisionCircle::new(Vec2::new(2.0, 2.0), 1.5).overlaps_body(&boxy));
    }
}
