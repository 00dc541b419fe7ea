//! Deterministic seed-hash selection for consistent routing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::loadbalance::LoadBalance;

/// Hashes the routing seed onto the candidate set, so a fixed
/// `(candidates, seed)` pair always resolves to the same node while the
/// candidate set stays unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedHashLoadBalance;

impl LoadBalance for SeedHashLoadBalance {
    fn select<'a, S>(&self, candidates: &'a [S], seed: &str) -> Option<&'a S> {
        if candidates.is_empty() {
            return None;
        }
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        let index = (hasher.finish() % candidates.len() as u64) as usize;
        candidates.get(index)
    }
}
