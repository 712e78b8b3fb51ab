use serde::{Deserialize, Serialize};
use std::fmt;
use super::RingSize;
use crate::{BalancerError, Result};

/// A contiguous half-open range `[range_start, range_stop)` of the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    pub ring_size: RingSize,
    pub range_start: i32,
    pub range_stop: i32,
    pub unix_time_ns: i64,
}

impl Partition {
    pub fn new(ring_size: RingSize, range_start: i32, range_stop: i32, unix_time_ns: i64) -> Result<Self> {
        if range_start < 0 || range_start >= range_stop || range_stop > ring_size {
            return Err(BalancerError::InvalidArgument(format!(
                "partition range [{}, {}) does not fit in ring of size {}",
                range_start, range_stop, ring_size
            )));
        }

        Ok(Self {
            ring_size,
            range_start,
            range_stop,
            unix_time_ns,
        })
    }

    /// Number of ring slots covered
    pub fn len(&self) -> i32 {
        self.range_stop - self.range_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    pub fn contains(&self, key: i32) -> bool {
        key >= self.range_start && key < self.range_stop
    }

    /// Same ring slice, ignoring when it was created
    pub fn same_range(&self, other: &Partition) -> bool {
        self.ring_size == other.ring_size
            && self.range_start == other.range_start
            && self.range_stop == other.range_stop
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})/{}", self.range_start, self.range_stop, self.ring_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_rejects_inverted_range() {
        assert!(Partition::new(100, 10, 10, 0).is_err());
        assert!(Partition::new(100, 20, 10, 0).is_err());
        assert!(Partition::new(100, -1, 10, 0).is_err());
        assert!(Partition::new(100, 90, 101, 0).is_err());
    }

    #[test]
    fn test_partition_contains_is_half_open() {
        let partition = Partition::new(100, 10, 20, 0).unwrap();
        assert!(!partition.contains(9));
        assert!(partition.contains(10));
        assert!(partition.contains(19));
        assert!(!partition.contains(20));
        assert_eq!(partition.len(), 10);
        assert_eq!(partition.to_string(), "[10, 20)/100");
    }

    #[test]
    fn test_same_range_ignores_timestamp() {
        let a = Partition::new(100, 0, 50, 1).unwrap();
        let b = Partition::new(100, 0, 50, 2).unwrap();
        assert!(a.same_range(&b));
        assert_ne!(a, b);
    }
}
