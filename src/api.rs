use glam::Vec2;

/// Capability shared by every rectangular collision body.
///
/// A body reports a *current* center position and a *constant* half size,
/// and can translate itself. `translate` performs no bounds checking;
/// world-boundary clamping is the caller's job. The collision routines
/// borrow bodies for the duration of a call and never take ownership.
///
/// Exactly two implementers exist: [`RectShape`](crate::body::RectShape)
/// (explicit size) and [`Sprite`](crate::body::Sprite) (half size derived
/// from its texture rectangle). The set is closed.
pub trait CollisionBody {
    /// Current center of the body in world coordinates.
    fn position(&self) -> Vec2;

    /// Half extents along X/Y. Constant for the life of the body.
    fn half_size(&self) -> Vec2;

    /// Translate the body by `delta`, mutating the owning transform.
    fn translate(&mut self, delta: Vec2);
}
