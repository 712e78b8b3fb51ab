// Type aliases used across models
pub type BrokerAddress = String;
pub type RingSize = i32;

// Module declarations
mod broker;
mod partition;
mod assignment;

// Re-exports
pub use broker::BrokerStats;
pub use partition::Partition;
pub use assignment::BrokerPartitionAssignment;
