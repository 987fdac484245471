use crate::objects::Body;

/// Produces the candidate pairs handed to the narrow phase.
///
/// Each pair `(i, j)` must satisfy `i < j`, and pairs must be in ascending
/// order of `i`, then `j`.
pub trait BroadPhase: Send + Sync {
    fn candidate_pairs(&self, bodies: &[Body]) -> Vec<(usize, usize)>;
}

/// Every unordered pair, `n * (n - 1) / 2` in total.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPairs;

impl BroadPhase for AllPairs {
    fn candidate_pairs(&self, bodies: &[Body]) -> Vec<(usize, usize)> {
        let n = bodies.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((i, j));
            }
        }
        pairs
    }
}
