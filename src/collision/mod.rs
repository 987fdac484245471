pub mod broadphase;
pub mod detection;
pub mod group;
pub mod handler;
pub mod manager;
pub mod manifold;

// Re-export key types
pub use broadphase::{AllPairs, BroadPhase};
pub use detection::{check_circle_circle, check_polygon_polygon};
pub use group::{CollisionGroup, PairOutcome};
pub use handler::{CircleCircleHandler, CollisionHandler, HandlerRegistry, PolygonPolygonHandler};
pub use manager::CollisionManager;
pub use manifold::ContactManifold;
