use crate::math::vec2::Vec2;

/// Geometric description of an overlap between two bodies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactManifold {
    /// Unit collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// Distance the bodies must move apart along `normal` to stop overlapping.
    pub penetration: f64,
    /// World-space contact points. Never empty.
    pub contact_points: Vec<Vec2>,
}

impl ContactManifold {
    pub fn new(normal: Vec2, penetration: f64, contact_points: Vec<Vec2>) -> Self {
        debug_assert!(!contact_points.is_empty(), "manifold without contact points");
        Self {
            normal,
            penetration,
            contact_points,
        }
    }
}
