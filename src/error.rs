//! Error types for shape construction and collision detection.

use crate::shapes::ShapeKind;

/// Raised when a shape is built (or mutated) with invalid geometry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Circle radius was zero or negative
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Circle radius was NaN or infinite
    #[error("circle radius must be finite")]
    NonFiniteRadius,

    /// Polygon had fewer than three vertices
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A polygon vertex had a NaN or infinite coordinate
    #[error("polygon vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    /// The edge starting at `index` has zero length
    #[error("polygon edge starting at vertex {index} has zero length")]
    ZeroLengthEdge { index: usize },

    /// Two vertices share the same coordinates
    #[error("polygon vertices {first} and {second} are identical")]
    DuplicateVertex { first: usize, second: usize },
}

/// Raised by a detection pass. Any error aborts the whole batch.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// No registered handler accepts this pair of shape kinds and the
    /// manager is configured to treat that as an error.
    #[error("no collision handler for bodies {index_a} ({kind_a:?}) and {index_b} ({kind_b:?})")]
    UnsupportedPair {
        index_a: usize,
        index_b: usize,
        kind_a: ShapeKind,
        kind_b: ShapeKind,
    },

    /// A body position contains NaN or infinity
    #[error("body {index} has a non-finite position")]
    NonFinitePosition { index: usize },

    /// Shape validation failure. Never raised by a detection pass itself;
    /// it lets code that builds shapes and runs a pass share one `?` error
    /// type.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
