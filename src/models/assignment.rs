use serde::{Deserialize, Serialize};
use std::fmt;
use super::{BrokerAddress, Partition};
use crate::registry::BrokerRegistry;

/// A partition together with the broker currently leading it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerPartitionAssignment {
    pub partition: Partition,
    /// Empty until a leader has been picked
    pub leader_broker: BrokerAddress,
}

impl BrokerPartitionAssignment {
    pub fn new(partition: Partition, leader_broker: impl Into<BrokerAddress>) -> Self {
        Self {
            partition,
            leader_broker: leader_broker.into(),
        }
    }

    pub fn unassigned(partition: Partition) -> Self {
        Self::new(partition, BrokerAddress::new())
    }

    pub fn has_leader(&self) -> bool {
        !self.leader_broker.is_empty()
    }

    /// Whether the leader is set and present in the given active view
    pub fn is_led_by_active<R>(&self, active_brokers: &R) -> bool
    where
        R: BrokerRegistry + ?Sized,
    {
        self.has_leader() && active_brokers.contains(&self.leader_broker)
    }
}

impl fmt::Display for BrokerPartitionAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_leader() {
            write!(f, "{} -> {}", self.partition, self.leader_broker)
        } else {
            write!(f, "{} -> <unassigned>", self.partition)
        }
    }
}
