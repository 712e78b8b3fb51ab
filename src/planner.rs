use crate::models::{BrokerPartitionAssignment, Partition, RingSize};
use crate::registry::BrokerRegistry;
use crate::selector::{pick_brokers, BrokerSelector};
use crate::{BalancerError, Result};

/// Divide `[0, ring_size)` into `partition_count` contiguous partitions and
/// pick a leader for each one among the brokers in `brokers`.
///
/// Every partition gets `ring_size / partition_count` slots; the last one also
/// takes whatever the integer division truncated, so the final range always
/// stops exactly at `ring_size`.
pub fn allocate_topic_partitions<R>(
    brokers: &R,
    partition_count: i32,
    ring_size: RingSize,
    selector: &dyn BrokerSelector,
) -> Result<Vec<BrokerPartitionAssignment>>
where
    R: BrokerRegistry + ?Sized,
{
    let partitions = divide_ring(partition_count, ring_size)?;

    let leaders = pick_brokers(brokers, partitions.len(), selector)?;

    let assignments: Vec<BrokerPartitionAssignment> = partitions
        .into_iter()
        .zip(leaders)
        .map(|(partition, leader)| BrokerPartitionAssignment::new(partition, leader))
        .collect();

    tracing::info!(
        partition_count = assignments.len(),
        ring_size,
        selector = selector.name(),
        "allocated topic partitions"
    );
    for assignment in &assignments {
        tracing::debug!(%assignment, "partition assignment");
    }

    Ok(assignments)
}

/// Tile the ring into `partition_count` ranges, all stamped with the same creation time
pub fn divide_ring(partition_count: i32, ring_size: RingSize) -> Result<Vec<Partition>> {
    if partition_count <= 0 {
        return Err(BalancerError::InvalidArgument(format!(
            "partition count must be positive, got {}",
            partition_count
        )));
    }
    if ring_size <= 0 {
        return Err(BalancerError::InvalidArgument(format!(
            "ring size must be positive, got {}",
            ring_size
        )));
    }
    if partition_count > ring_size {
        return Err(BalancerError::InvalidArgument(format!(
            "partition count {} exceeds ring size {}",
            partition_count, ring_size
        )));
    }

    let now = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let range_size = ring_size / partition_count;

    (0..partition_count)
        .map(|i| {
            let range_start = i * range_size;
            let range_stop = if i == partition_count - 1 {
                ring_size
            } else {
                (i + 1) * range_size
            };
            Partition::new(ring_size, range_start, range_stop, now)
        })
        .collect()
}
