use crate::models::BrokerPartitionAssignment;
use crate::registry::BrokerRegistry;
use crate::selector::{pick_brokers, BrokerSelector};
use crate::Result;

/// Find assignments whose leader is empty or not in `active_brokers` and
/// give each of them a freshly picked active leader.
///
/// Only the rewritten assignments are returned, in input order; healthy ones
/// are left out. The input slice is not modified, see [`merge_fixups`].
/// Several repaired partitions may land on the same broker.
pub fn ensure_assignments_to_active_brokers<R>(
    active_brokers: &R,
    assignments: &[BrokerPartitionAssignment],
    selector: &dyn BrokerSelector,
) -> Result<Vec<BrokerPartitionAssignment>>
where
    R: BrokerRegistry + ?Sized,
{
    let mut changed: Vec<BrokerPartitionAssignment> = assignments
        .iter()
        .filter(|assignment| !assignment.is_led_by_active(active_brokers))
        .cloned()
        .collect();

    if changed.is_empty() {
        return Ok(changed);
    }

    tracing::warn!(
        broken = changed.len(),
        total = assignments.len(),
        active_brokers = active_brokers.count(),
        "reassigning partitions with missing or inactive leaders"
    );

    let leaders = pick_brokers(active_brokers, changed.len(), selector)?;
    for (assignment, leader) in changed.iter_mut().zip(leaders) {
        tracing::debug!(
            partition = %assignment.partition,
            from = %assignment.leader_broker,
            to = %leader,
            "leader reassigned"
        );
        assignment.leader_broker = leader;
    }

    Ok(changed)
}

/// Write repaired leaders back into `assignments`, matching entries by ring range.
/// Returns how many entries were updated.
pub fn merge_fixups(
    assignments: &mut [BrokerPartitionAssignment],
    fixups: &[BrokerPartitionAssignment],
) -> usize {
    let mut updated = 0;
    for fixup in fixups {
        if let Some(target) = assignments
            .iter_mut()
            .find(|a| a.partition.same_range(&fixup.partition))
        {
            target.leader_broker = fixup.leader_broker.clone();
            updated += 1;
        }
    }
    updated
}
