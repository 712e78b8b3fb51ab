use crate::models::{BrokerPartitionAssignment, RingSize};
use crate::registry::BrokerRegistry;
use crate::{BalancerError, Result};

/// Check that the assignments tile `[0, ring_size)` exactly: every partition
/// uses `ring_size`, ranges are ascending, and each one starts where the
/// previous stopped.
pub fn validate_assignments(
    assignments: &[BrokerPartitionAssignment],
    ring_size: RingSize,
) -> Result<()> {
    if assignments.is_empty() {
        return Err(BalancerError::InvalidAssignment("no partitions".to_string()));
    }

    let mut expected_start = 0;
    for (index, assignment) in assignments.iter().enumerate() {
        let partition = &assignment.partition;

        if partition.ring_size != ring_size {
            return Err(BalancerError::InvalidAssignment(format!(
                "partition {} uses ring size {}, expected {}",
                index, partition.ring_size, ring_size
            )));
        }
        if partition.range_start != expected_start {
            return Err(BalancerError::InvalidAssignment(format!(
                "partition {} starts at {}, expected {}",
                index, partition.range_start, expected_start
            )));
        }
        if partition.is_empty() {
            return Err(BalancerError::InvalidAssignment(format!(
                "partition {} has empty range {}",
                index, partition
            )));
        }

        expected_start = partition.range_stop;
    }

    if expected_start != ring_size {
        return Err(BalancerError::InvalidAssignment(format!(
            "partitions stop at {}, ring size is {}",
            expected_start, ring_size
        )));
    }

    Ok(())
}

/// Tiling check plus: every partition is led by a broker in `active_brokers`.
/// Assignments failing this must not be handed to clients.
pub fn check_publishable<R>(
    assignments: &[BrokerPartitionAssignment],
    active_brokers: &R,
    ring_size: RingSize,
) -> Result<()>
where
    R: BrokerRegistry + ?Sized,
{
    validate_assignments(assignments, ring_size)?;

    if let Some(stale) = assignments
        .iter()
        .find(|a| !a.is_led_by_active(active_brokers))
    {
        return Err(BalancerError::InvalidAssignment(format!(
            "partition {} has no active leader",
            stale
        )));
    }

    Ok(())
}
