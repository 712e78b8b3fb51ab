use dashmap::DashMap;
use std::collections::HashMap;
use crate::models::{BrokerAddress, BrokerStats};

/// Read-only view of broker membership.
///
/// The membership subsystem owns and mutates the registry (heartbeats, expiry).
/// Planning and repair only read it, one call at a time, so two successive
/// calls may observe different brokers.
pub trait BrokerRegistry {
    /// Stats for a single broker, if it is registered
    fn lookup(&self, address: &str) -> Option<BrokerStats>;

    fn contains(&self, address: &str) -> bool {
        self.lookup(address).is_some()
    }

    /// Addresses of every registered broker, in no particular order
    fn addresses(&self) -> Vec<BrokerAddress>;

    /// Every registered broker with its stats, in no particular order
    fn entries(&self) -> Vec<(BrokerAddress, BrokerStats)>;

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl BrokerRegistry for DashMap<BrokerAddress, BrokerStats> {
    fn lookup(&self, address: &str) -> Option<BrokerStats> {
        self.get(address).map(|entry| entry.value().clone())
    }

    fn contains(&self, address: &str) -> bool {
        self.contains_key(address)
    }

    fn addresses(&self) -> Vec<BrokerAddress> {
        self.iter().map(|entry| entry.key().clone()).collect()
    }

    fn entries(&self) -> Vec<(BrokerAddress, BrokerStats)> {
        self.iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl BrokerRegistry for HashMap<BrokerAddress, BrokerStats> {
    fn lookup(&self, address: &str) -> Option<BrokerStats> {
        self.get(address).cloned()
    }

    fn contains(&self, address: &str) -> bool {
        self.contains_key(address)
    }

    fn addresses(&self) -> Vec<BrokerAddress> {
        self.keys().cloned().collect()
    }

    fn entries(&self) -> Vec<(BrokerAddress, BrokerStats)> {
        self.iter()
            .map(|(address, stats)| (address.clone(), stats.clone()))
            .collect()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Registered addresses in sorted order.
///
/// Map iteration order is arbitrary; sorting keeps a seeded selector reproducible.
pub fn candidates<R>(registry: &R) -> Vec<BrokerAddress>
where
    R: BrokerRegistry + ?Sized,
{
    let mut addresses = registry.addresses();
    addresses.sort_unstable();
    addresses
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_dashmap_registry_lookup() {
        let registry: DashMap<BrokerAddress, BrokerStats> = DashMap::new();
        registry.insert("b1:17777".to_string(), BrokerStats::new(3, 1, 12.5));

        assert!(registry.contains("b1:17777"));
        assert!(!registry.contains("b2:17777"));
        assert_eq!(registry.lookup("b1:17777").map(|s| s.topic_partition_count), Some(3));
        assert_eq!(BrokerRegistry::count(&registry), 1);
    }

    #[test]
    fn test_entries_carry_stats() {
        let registry: DashMap<BrokerAddress, BrokerStats> = DashMap::new();
        registry.insert("b1".to_string(), BrokerStats::new(4, 2, 30.0));
        registry.insert("b2".to_string(), BrokerStats::new(1, 0, 5.0));

        let mut entries = registry.entries();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            entries,
            vec![
                ("b1".to_string(), BrokerStats::new(4, 2, 30.0)),
                ("b2".to_string(), BrokerStats::new(1, 0, 5.0)),
            ]
        );

        let snapshot: HashMap<BrokerAddress, BrokerStats> = entries.into_iter().collect();
        assert_eq!(snapshot.entries().len(), 2);
    }

    #[test]
    fn test_candidates_are_sorted() {
        let registry: HashMap<BrokerAddress, BrokerStats> = ["c", "a", "b"]
            .iter()
            .map(|a| (a.to_string(), BrokerStats::default()))
            .collect();

        assert_eq!(candidates(&registry), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dashmap_registry_read_while_mutated() {
        let registry: Arc<DashMap<BrokerAddress, BrokerStats>> = Arc::new(DashMap::new());

        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..1000 {
                    registry.insert(format!("b{}", i % 10), BrokerStats::default());
                    if i % 3 == 0 {
                        registry.remove(&format!("b{}", (i + 5) % 10));
                    }
                }
            })
        };

        for _ in 0..100 {
            let addresses = candidates(&*registry);
            assert!(addresses.len() <= 10);
        }

        writer.join().unwrap();
    }
}
