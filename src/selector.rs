use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use crate::models::BrokerAddress;
use crate::registry::{candidates, BrokerRegistry};
use crate::{BalancerError, Result};

/// Strategy for choosing leader brokers out of a candidate set
pub trait BrokerSelector: Send + Sync {
    /// Name of this policy
    fn name(&self) -> &str;

    /// Return exactly `count` addresses taken from `candidates`.
    /// The same address may be returned more than once.
    fn select(&self, candidates: &[BrokerAddress], count: usize) -> Result<Vec<BrokerAddress>>;
}

// TODO: weigh candidates by BrokerStats once brokers report partition load
/// Picks each leader independently and uniformly at random, with replacement.
pub struct RandomSelector {
    seeded: Option<Mutex<StdRng>>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// A selector that produces the same picks for the same seed and inputs
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn pick_with<G: Rng>(rng: &mut G, candidates: &[BrokerAddress], count: usize) -> Vec<BrokerAddress> {
        (0..count)
            .map(|_| candidates[rng.gen_range(0..candidates.len())].clone())
            .collect()
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl BrokerSelector for RandomSelector {
    fn name(&self) -> &str {
        "RandomSelector"
    }

    fn select(&self, candidates: &[BrokerAddress], count: usize) -> Result<Vec<BrokerAddress>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if candidates.is_empty() {
            return Err(BalancerError::NoCandidates { requested: count });
        }

        let picked = match &self.seeded {
            Some(rng) => {
                // a poisoned lock still holds a usable generator
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                Self::pick_with(&mut *rng, candidates, count)
            }
            None => Self::pick_with(&mut rand::thread_rng(), candidates, count),
        };
        Ok(picked)
    }
}

/// Pick `count` leaders among the brokers currently in `registry`.
///
/// The selector's answer is checked: it must hold exactly `count` addresses,
/// all of them candidates, otherwise `InvalidSelection` is returned.
pub fn pick_brokers<R>(
    registry: &R,
    count: usize,
    selector: &dyn BrokerSelector,
) -> Result<Vec<BrokerAddress>>
where
    R: BrokerRegistry + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    let candidates = candidates(registry);
    tracing::trace!(
        selector = selector.name(),
        candidates = candidates.len(),
        count,
        "picking brokers"
    );

    let picked = selector.select(&candidates, count)?;
    if picked.len() != count {
        return Err(BalancerError::InvalidSelection(format!(
            "{} returned {} broker(s), {} requested",
            selector.name(),
            picked.len(),
            count
        )));
    }
    if let Some(unknown) = picked.iter().find(|p| !candidates.contains(p)) {
        return Err(BalancerError::InvalidSelection(format!(
            "{} returned '{}', which is not a candidate",
            selector.name(),
            unknown
        )));
    }
    Ok(picked)
}
