use super::detection::{check_circle_circle, check_polygon_polygon};
use super::group::CollisionGroup;
use crate::config::CollisionConfig;
use crate::shapes::ShapeKind;

/// A narrow-phase algorithm for one or more combinations of shape kinds.
///
/// `handle_collision` is only called on groups whose kinds were accepted by
/// `can_handle`, in the same (A, B) order. The group arrives marked
/// `PairOutcome::Separated`; a handler that finds contact records it with
/// `CollisionGroup::set_contact`.
pub trait CollisionHandler: Send + Sync {
    /// Identifies the handler in logs and for `HandlerRegistry::remove`.
    fn name(&self) -> &str;

    fn can_handle(&self, a: ShapeKind, b: ShapeKind) -> bool;

    fn handle_collision(&self, group: &mut CollisionGroup<'_>, config: &CollisionConfig);
}

/// Circle against circle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleCircleHandler;

impl CollisionHandler for CircleCircleHandler {
    fn name(&self) -> &str {
        "circle-circle"
    }

    fn can_handle(&self, a: ShapeKind, b: ShapeKind) -> bool {
        a == ShapeKind::Circle && b == ShapeKind::Circle
    }

    fn handle_collision(&self, group: &mut CollisionGroup<'_>, _config: &CollisionConfig) {
        let (a, b) = (group.a(), group.b());
        let (Some(circle_a), Some(circle_b)) = (a.shape().as_circle(), b.shape().as_circle()) else {
            return;
        };
        group.set_contact(check_circle_circle(a.position, circle_a, b.position, circle_b));
    }
}

/// Convex polygon against convex polygon, via the separating axis theorem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonPolygonHandler;

impl CollisionHandler for PolygonPolygonHandler {
    fn name(&self) -> &str {
        "polygon-polygon"
    }

    fn can_handle(&self, a: ShapeKind, b: ShapeKind) -> bool {
        a == ShapeKind::Polygon && b == ShapeKind::Polygon
    }

    fn handle_collision(&self, group: &mut CollisionGroup<'_>, config: &CollisionConfig) {
        let (a, b) = (group.a(), group.b());
        let (Some(polygon_a), Some(polygon_b)) = (a.shape().as_polygon(), b.shape().as_polygon()) else {
            return;
        };
        group.set_contact(check_polygon_polygon(
            polygon_a, a.position, polygon_b, b.position, config,
        ));
    }
}

/// Ordered collection of handlers.
///
/// For each (kind A, kind B) combination the first registered handler that
/// accepts it is used. The lookup is cached in a table indexed by kind and
/// rebuilt whenever the handler list changes.
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn CollisionHandler>>,
    dispatch: [[Option<usize>; 2]; 2],
}

impl HandlerRegistry {
    /// A registry with no handlers. Every pair is unsupported.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            dispatch: [[None; 2]; 2],
        }
    }

    /// Appends a handler. It only takes effect for kind combinations no
    /// earlier handler accepts.
    pub fn register(&mut self, handler: Box<dyn CollisionHandler>) {
        log::debug!("registering collision handler '{}'", handler.name());
        self.handlers.push(handler);
        self.rebuild_dispatch();
    }

    /// Removes every handler with the given name and returns how many were
    /// removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|handler| handler.name() != name);
        let removed = before - self.handlers.len();
        if removed > 0 {
            log::debug!("removed collision handler '{}'", name);
            self.rebuild_dispatch();
        }
        removed
    }

    /// The first handler that accepts `(a, b)` in that order.
    pub fn find(&self, a: ShapeKind, b: ShapeKind) -> Option<&dyn CollisionHandler> {
        self.dispatch[a.index()][b.index()].map(|i| self.handlers[i].as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.iter().map(|handler| handler.name())
    }

    fn rebuild_dispatch(&mut self) {
        for a in ShapeKind::ALL {
            for b in ShapeKind::ALL {
                self.dispatch[a.index()][b.index()] =
                    self.handlers.iter().position(|handler| handler.can_handle(a, b));
            }
        }
    }
}

impl Default for HandlerRegistry {
    /// Circle-circle first, then polygon-polygon.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CircleCircleHandler));
        registry.register(Box::new(PolygonPolygonHandler));
        registry
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::objects::Body;
    use crate::shapes::{Circle, Polygon};

    struct AnyHandler(&'static str);

    impl CollisionHandler for AnyHandler {
        fn name(&self) -> &str {
            self.0
        }

        fn can_handle(&self, _a: ShapeKind, _b: ShapeKind) -> bool {
            true
        }

        fn handle_collision(&self, group: &mut CollisionGroup<'_>, _config: &CollisionConfig) {
            group.set_contact(None);
        }
    }

    fn square(x: f64) -> Body {
        let polygon = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ])
        .unwrap();
        Body::new(polygon, Vec2::new(x, 0.0))
    }

    #[test]
    fn test_can_handle() {
        let (circle, polygon) = (ShapeKind::Circle, ShapeKind::Polygon);
        assert!(CircleCircleHandler.can_handle(circle, circle));
        assert!(!CircleCircleHandler.can_handle(circle, polygon));
        assert!(!CircleCircleHandler.can_handle(polygon, polygon));
        assert!(PolygonPolygonHandler.can_handle(polygon, polygon));
        assert!(!PolygonPolygonHandler.can_handle(polygon, circle));
    }

    #[test]
    fn test_default_registry_dispatch() {
        let registry = HandlerRegistry::default();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["circle-circle", "polygon-polygon"]);

        let found = registry.find(ShapeKind::Circle, ShapeKind::Circle).unwrap();
        assert_eq!(found.name(), "circle-circle");
        let found = registry.find(ShapeKind::Polygon, ShapeKind::Polygon).unwrap();
        assert_eq!(found.name(), "polygon-polygon");

        assert!(registry.find(ShapeKind::Circle, ShapeKind::Polygon).is_none());
        assert!(registry.find(ShapeKind::Polygon, ShapeKind::Circle).is_none());
    }

    #[test]
    fn test_first_registered_handler_wins() {
        let mut registry = HandlerRegistry::default();
        registry.register(Box::new(AnyHandler("fallback")));

        assert_eq!(
            registry.find(ShapeKind::Circle, ShapeKind::Circle).unwrap().name(),
            "circle-circle"
        );
        assert_eq!(
            registry.find(ShapeKind::Circle, ShapeKind::Polygon).unwrap().name(),
            "fallback"
        );
    }

    #[test]
    fn test_remove_handler() {
        let mut registry = HandlerRegistry::default();
        assert_eq!(registry.remove("circle-circle"), 1);
        assert_eq!(registry.remove("circle-circle"), 0);
        assert_eq!(registry.len(), 1);
        assert!(registry.find(ShapeKind::Circle, ShapeKind::Circle).is_none());
        assert!(registry.find(ShapeKind::Polygon, ShapeKind::Polygon).is_some());
    }

    #[test]
    fn test_empty_registry() {
        let registry = HandlerRegistry::empty();
        assert!(registry.is_empty());
        for a in ShapeKind::ALL {
            for b in ShapeKind::ALL {
                assert!(registry.find(a, b).is_none());
            }
        }
    }

    #[test]
    fn test_polygon_handler_records_contact() {
        let (a, b) = (square(0.0), square(1.0));
        let mut group = CollisionGroup::new(0, &a, 1, &b);
        PolygonPolygonHandler.handle_collision(&mut group, &CollisionConfig::default());
        assert!(group.is_colliding());
        assert!((group.penetration().unwrap() - 1.0).abs() < 1e-9);

        let far = square(5.0);
        let mut group = CollisionGroup::new(0, &a, 1, &far);
        PolygonPolygonHandler.handle_collision(&mut group, &CollisionConfig::default());
        assert!(group.is_supported());
        assert!(!group.is_colliding());
    }

    #[test]
    fn test_circle_handler_records_contact() {
        let a = Body::new(Circle::new(1.0).unwrap(), Vec2::ZERO);
        let b = Body::new(Circle::new(1.0).unwrap(), Vec2::new(1.0, 0.0));
        let mut group = CollisionGroup::new(0, &a, 1, &b);
        CircleCircleHandler.handle_collision(&mut group, &CollisionConfig::default());
        assert_eq!(group.normal(), Some(Vec2::X));
        assert_eq!(group.contact_points(), Some(&[Vec2::new(1.0, 0.0)][..]));
    }
}
