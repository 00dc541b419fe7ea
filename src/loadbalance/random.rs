//! Uniform-random selection, the default routing policy.

use rand::Rng;

use crate::loadbalance::LoadBalance;

/// Picks uniformly at random; the seed is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLoadBalance;

impl LoadBalance for RandomLoadBalance {
    fn select<'a, S>(&self, candidates: &'a [S], _seed: &str) -> Option<&'a S> {
        if candidates.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..candidates.len());
        candidates.get(index)
    }
}
