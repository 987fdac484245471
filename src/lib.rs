//! Collision detection and contact generation for 2D circles and convex
//! polygons.
//!
//! Build `Body` values, hand a slice of them to a `CollisionManager`, and
//! read back one `CollisionGroup` per pair.

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{
    CollisionGroup, CollisionHandler, CollisionManager, ContactManifold, HandlerRegistry,
    PairOutcome,
};
pub use config::{CollisionConfig, PolygonContactMode, UnsupportedPairPolicy};
pub use error::{CollisionError, ValidationError};
pub use math::vec2::Vec2;
pub use objects::Body;
pub use shapes::{Circle, Polygon, Shape, ShapeKind};
