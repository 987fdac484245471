use super::broadphase::{AllPairs, BroadPhase};
use super::group::CollisionGroup;
use super::handler::{CollisionHandler, HandlerRegistry};
use crate::config::{CollisionConfig, UnsupportedPairPolicy};
use crate::error::CollisionError;
use crate::objects::Body;

/// Runs detection passes over a slice of bodies.
///
/// A pass produces one `CollisionGroup` per candidate pair, in candidate
/// order, and never mutates the bodies. Running the same pass twice over
/// unchanged bodies gives equal results.
pub struct CollisionManager {
    registry: HandlerRegistry,
    broad_phase: Box<dyn BroadPhase>,
    config: CollisionConfig,
}

impl CollisionManager {
    /// A manager with the built-in handlers, all-pairs candidates and the
    /// default config.
    pub fn new() -> Self {
        Self::with_config(CollisionConfig::default())
    }

    pub fn with_config(config: CollisionConfig) -> Self {
        Self {
            registry: HandlerRegistry::default(),
            broad_phase: Box::new(AllPairs),
            config,
        }
    }

    /// Replaces the handler registry wholesale.
    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_broad_phase(mut self, broad_phase: impl BroadPhase + 'static) -> Self {
        self.broad_phase = Box::new(broad_phase);
        self
    }

    /// Appends a handler after the existing ones.
    pub fn register_handler(&mut self, handler: impl CollisionHandler + 'static) {
        self.registry.register(Box::new(handler));
    }

    /// Removes handlers by name, returning how many were removed.
    pub fn remove_handler(&mut self, name: &str) -> usize {
        self.registry.remove(name)
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CollisionConfig {
        &mut self.config
    }

    /// Tests every candidate pair and returns one group per pair.
    ///
    /// Pairs no handler accepts come back as `PairOutcome::Unsupported`, or
    /// abort the pass when the config asks for `UnsupportedPairPolicy::Error`.
    pub fn detect_collisions<'a>(
        &self,
        bodies: &'a [Body],
    ) -> Result<Vec<CollisionGroup<'a>>, CollisionError> {
        if let Some(index) = bodies.iter().position(|body| !body.position.is_finite()) {
            return Err(CollisionError::NonFinitePosition { index });
        }

        let pairs = self.broad_phase.candidate_pairs(bodies);
        let groups = self.run_narrow_phase(bodies, &pairs)?;

        let colliding = groups.iter().filter(|g| g.is_colliding()).count();
        let unsupported = groups.iter().filter(|g| !g.is_supported()).count();
        if unsupported > 0 {
            log::warn!(
                "{} of {} pairs had no collision handler and were not tested",
                unsupported,
                groups.len()
            );
        }
        log::debug!(
            "detection pass: {} bodies, {} pairs, {} colliding, {} unsupported",
            bodies.len(),
            groups.len(),
            colliding,
            unsupported
        );

        Ok(groups)
    }

    /// Same as `detect_collisions`, keeping only the colliding groups.
    pub fn detect_colliding<'a>(
        &self,
        bodies: &'a [Body],
    ) -> Result<Vec<CollisionGroup<'a>>, CollisionError> {
        let mut groups = self.detect_collisions(bodies)?;
        groups.retain(|group| group.is_colliding());
        Ok(groups)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_narrow_phase<'a>(
        &self,
        bodies: &'a [Body],
        pairs: &[(usize, usize)],
    ) -> Result<Vec<CollisionGroup<'a>>, CollisionError> {
        pairs
            .iter()
            .map(|&(i, j)| self.test_pair(bodies, i, j))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_narrow_phase<'a>(
        &self,
        bodies: &'a [Body],
        pairs: &[(usize, usize)],
    ) -> Result<Vec<CollisionGroup<'a>>, CollisionError> {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&(i, j)| self.test_pair(bodies, i, j))
            .collect()
    }

    fn test_pair<'a>(
        &self,
        bodies: &'a [Body],
        i: usize,
        j: usize,
    ) -> Result<CollisionGroup<'a>, CollisionError> {
        let mut group = CollisionGroup::new(i, &bodies[i], j, &bodies[j]);
        let (kind_a, kind_b) = group.kinds();

        match self.registry.find(kind_a, kind_b) {
            Some(handler) => {
                group.set_contact(None);
                handler.handle_collision(&mut group, &self.config);
                log::trace!(
                    "{} ({}, {}): {:?}",
                    handler.name(),
                    i,
                    j,
                    group.outcome()
                );
            }
            None if self.config.unsupported_pairs == UnsupportedPairPolicy::Error => {
                return Err(CollisionError::UnsupportedPair {
                    index_a: i,
                    index_b: j,
                    kind_a,
                    kind_b,
                });
            }
            None => {}
        }
        Ok(group)
    }
}

impl Default for CollisionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CollisionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionManager")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
