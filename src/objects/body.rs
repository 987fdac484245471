use crate::math::vec2::Vec2;
use crate::shapes::{Shape, ShapeKind};

/// A positioned object that owns exactly one shape.
///
/// `position` is the world-space translation of the shape's local origin.
/// For circles it is the center; polygon vertices are offset by it.
/// Velocity integration happens elsewhere, so the position is simply set
/// by the caller between detection passes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    shape: Shape,
    pub position: Vec2,
}

impl Body {
    pub fn new(shape: impl Into<Shape>, position: Vec2) -> Self {
        Self {
            shape: shape.into(),
            position,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Swaps in a new shape and hands back the previous one.
    pub fn set_shape(&mut self, shape: impl Into<Shape>) -> Shape {
        std::mem::replace(&mut self.shape, shape.into())
    }
}
