//! Tunables for a `CollisionManager`.

/// What to do with a pair no registered handler can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum UnsupportedPairPolicy {
    /// Emit the group with `PairOutcome::Unsupported`.
    #[default]
    Report,
    /// Abort the pass with `CollisionError::UnsupportedPair`.
    Error,
}

/// How contact points are produced for polygon pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum PolygonContactMode {
    /// Clip the incident edge against the reference edge (one or two points).
    #[default]
    Clipped,
    /// A single point halfway between the two polygon centers.
    CenterMidpoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(default))]
pub struct CollisionConfig {
    pub unsupported_pairs: UnsupportedPairPolicy,
    pub polygon_contacts: PolygonContactMode,
    /// Slack when deciding whether a clipped point lies behind the
    /// reference face.
    pub contact_tolerance: f64,
}

impl CollisionConfig {
    const DEFAULT_CONTACT_TOLERANCE: f64 = 1e-9;
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            unsupported_pairs: UnsupportedPairPolicy::Report,
            polygon_contacts: PolygonContactMode::Clipped,
            contact_tolerance: Self::DEFAULT_CONTACT_TOLERANCE,
        }
    }
}
