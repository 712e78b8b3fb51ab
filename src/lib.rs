// Pub/Sub Partition Balancer Library
// Tiles a topic's keyspace ring into partitions and keeps every partition led by a live broker

pub mod config;
pub mod models;
pub mod planner;
pub mod registry;
pub mod repair;
pub mod selector;
pub mod validate;

pub use config::BalancerConfig;
pub use models::{BrokerAddress, BrokerPartitionAssignment, BrokerStats, Partition};
pub use planner::allocate_topic_partitions;
pub use registry::BrokerRegistry;
pub use repair::{ensure_assignments_to_active_brokers, merge_fixups};
pub use selector::{pick_brokers, BrokerSelector, RandomSelector};
pub use validate::{check_publishable, validate_assignments};

pub type Result<T> = std::result::Result<T, BalancerError>;

/// Main entry point for allocating and repairing topic partitions
pub struct Balancer {
    config: BalancerConfig,
    selector: Box<dyn BrokerSelector>,
}

impl Balancer {
    pub fn new(config: BalancerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            selector: Box::new(RandomSelector::new()),
        })
    }

    /// Swap the leader selection policy
    pub fn with_selector(mut self, selector: Box<dyn BrokerSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Divide the ring into `partition_count` partitions and pick a leader for each
    pub fn allocate<R>(
        &self,
        brokers: &R,
        partition_count: i32,
    ) -> Result<Vec<BrokerPartitionAssignment>>
    where
        R: BrokerRegistry + ?Sized,
    {
        allocate_topic_partitions(
            brokers,
            partition_count,
            self.config.ring_size,
            self.selector.as_ref(),
        )
    }

    /// Re-leader every assignment whose leader is missing or no longer active.
    /// Only the rewritten assignments are returned.
    pub fn repair<R>(
        &self,
        active_brokers: &R,
        assignments: &[BrokerPartitionAssignment],
    ) -> Result<Vec<BrokerPartitionAssignment>>
    where
        R: BrokerRegistry + ?Sized,
    {
        ensure_assignments_to_active_brokers(active_brokers, assignments, self.selector.as_ref())
    }

    /// Check that the assignments tile this balancer's ring
    pub fn validate(&self, assignments: &[BrokerPartitionAssignment]) -> Result<()> {
        validate_assignments(assignments, self.config.ring_size)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BalancerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No candidate brokers available to pick {requested} leader(s)")]
    NoCandidates { requested: usize },

    #[error("Broker selector misbehaved: {0}")]
    InvalidSelection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn registry(addresses: &[&str]) -> HashMap<String, BrokerStats> {
        addresses
            .iter()
            .map(|a| (a.to_string(), BrokerStats::default()))
            .collect()
    }

    #[test]
    fn test_balancer_rejects_bad_config() {
        let result = Balancer::new(BalancerConfig::default().with_ring_size(0));
        assert!(matches!(result, Err(BalancerError::InvalidConfig(_))));
    }

    #[test]
    fn test_allocate_then_repair() {
        let balancer = Balancer::new(BalancerConfig::default().with_ring_size(8192))
            .unwrap()
            .with_selector(Box::new(RandomSelector::seeded(7)));

        let brokers = registry(&["b1", "b2", "b3"]);
        let mut assignments = balancer.allocate(&brokers, 4).unwrap();
        assert_eq!(assignments.len(), 4);
        balancer.validate(&assignments).unwrap();

        let survivors = registry(&["b4"]);
        let fixups = balancer.repair(&survivors, &assignments).unwrap();
        assert_eq!(fixups.len(), 4);

        merge_fixups(&mut assignments, &fixups);
        assert!(assignments.iter().all(|a| a.leader_broker == "b4"));
        check_publishable(&assignments, &survivors, 8192).unwrap();
    }

    #[test]
    fn test_allocate_with_empty_registry_fails() {
        let balancer = Balancer::new(BalancerConfig::default()).unwrap();
        let brokers = registry(&[]);
        assert_eq!(
            balancer.allocate(&brokers, 2),
            Err(BalancerError::NoCandidates { requested: 2 })
        );
    }
}
