use serde::{Deserialize, Serialize};

/// Load reported by a broker through its heartbeat.
///
/// Leader placement does not read these yet; they are carried so that a
/// load-aware [`BrokerSelector`](crate::BrokerSelector) can be plugged in later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerStats {
    pub topic_partition_count: i32,
    pub consumer_count: i32,
    pub cpu_usage_percent: f64,
}

impl BrokerStats {
    pub fn new(topic_partition_count: i32, consumer_count: i32, cpu_usage_percent: f64) -> Self {
        Self {
            topic_partition_count,
            consumer_count,
            cpu_usage_percent,
        }
    }
}
