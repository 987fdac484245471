use super::manifold::ContactManifold;
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::shapes::ShapeKind;

/// Result of testing one candidate pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum PairOutcome {
    /// No handler accepts this combination of shape kinds, so the pair was
    /// never tested. Distinct from `Separated`.
    Unsupported,
    /// Tested and not overlapping.
    Separated,
    /// Tested and overlapping.
    Colliding(ContactManifold),
}

/// A candidate pair of bodies plus the outcome of its narrow-phase test.
///
/// Groups are created fresh by every detection pass and borrow the bodies
/// they refer to. `index_a < index_b` always holds for groups produced by
/// the manager.
#[derive(Debug, Clone)]
pub struct CollisionGroup<'a> {
    index_a: usize,
    index_b: usize,
    a: &'a Body,
    b: &'a Body,
    outcome: PairOutcome,
}

impl<'a> CollisionGroup<'a> {
    /// A group that has not been tested yet.
    pub fn new(index_a: usize, a: &'a Body, index_b: usize, b: &'a Body) -> Self {
        Self {
            index_a,
            index_b,
            a,
            b,
            outcome: PairOutcome::Unsupported,
        }
    }

    pub fn a(&self) -> &'a Body {
        self.a
    }

    pub fn b(&self) -> &'a Body {
        self.b
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.index_a, self.index_b)
    }

    pub fn kinds(&self) -> (ShapeKind, ShapeKind) {
        (self.a.kind(), self.b.kind())
    }

    pub fn outcome(&self) -> &PairOutcome {
        &self.outcome
    }

    /// Records the narrow-phase result: `Some` means colliding, `None`
    /// means tested and separated.
    pub fn set_contact(&mut self, manifold: Option<ContactManifold>) {
        self.outcome = match manifold {
            Some(manifold) => PairOutcome::Colliding(manifold),
            None => PairOutcome::Separated,
        };
    }

    pub fn manifold(&self) -> Option<&ContactManifold> {
        match &self.outcome {
            PairOutcome::Colliding(manifold) => Some(manifold),
            _ => None,
        }
    }

    pub fn normal(&self) -> Option<Vec2> {
        self.manifold().map(|m| m.normal)
    }

    pub fn penetration(&self) -> Option<f64> {
        self.manifold().map(|m| m.penetration)
    }

    /// `None` whenever the pair is not colliding.
    pub fn contact_points(&self) -> Option<&[Vec2]> {
        self.manifold().map(|m| m.contact_points.as_slice())
    }

    pub fn is_colliding(&self) -> bool {
        self.manifold().is_some()
    }

    /// Whether some handler tested this pair.
    pub fn is_supported(&self) -> bool {
        !matches!(self.outcome, PairOutcome::Unsupported)
    }

    pub fn into_outcome(self) -> PairOutcome {
        self.outcome
    }
}

impl PartialEq for CollisionGroup<'_> {
    /// Bodies compare by identity, not by value.
    fn eq(&self, other: &Self) -> bool {
        self.index_a == other.index_a
            && self.index_b == other.index_b
            && std::ptr::eq(self.a, other.a)
            && std::ptr::eq(self.b, other.b)
            && self.outcome == other.outcome
    }
}
