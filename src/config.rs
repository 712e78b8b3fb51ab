use serde::{Deserialize, Serialize};
use crate::models::RingSize;
use crate::{BalancerError, Result};

/// Ring modulus used when none is configured. 2520 is divisible by every
/// partition count from 1 to 10, so small topics split evenly.
pub const DEFAULT_RING_SIZE: RingSize = 2520;

/// Process-wide settings for partition planning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    /// Size of the keyspace ring every topic is tiled over
    pub ring_size: RingSize,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            ring_size: DEFAULT_RING_SIZE,
        }
    }
}

impl BalancerConfig {
    pub fn with_ring_size(mut self, ring_size: RingSize) -> Self {
        self.ring_size = ring_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.ring_size <= 0 {
            return Err(BalancerError::InvalidConfig(format!(
                "ring_size must be positive, got {}",
                self.ring_size
            )));
        }
        Ok(())
    }
}
