use glam::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Component-wise clamp of `p` into the axis-aligned box `[min, max]`.
///
/// Used to find the closest point on a rectangle to a circle's epicenter.
/// Degenerate (zero-size) boxes are harmless: the result collapses to the
/// box corner.
pub fn clamp_vec(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
}
