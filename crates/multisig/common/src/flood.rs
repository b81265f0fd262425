//! Per-owner flood guard.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::{flood_limit_exceeded, OrderError};

/// Maximum number of outstanding internal-channel confirmations one owner
/// may have at any time.
pub const FLOOD_MAX: u8 = 10;

/// Bounds how many partially-confirmed orders each owner can have in flight,
/// so an owner cannot exhaust wallet storage with abandoned confirmations.
///
/// Counts reflect a sliding window of unexpired, unexecuted contributions:
/// the gate releases a count whenever a contributed entry expires or reaches
/// quorum.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct FloodGuard {
    counts: BTreeMap<u8, u8>,
}

impl FloodGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more outstanding confirmation for this owner.
    ///
    /// Fails without mutating if the owner is already at [`FLOOD_MAX`].
    pub fn try_increment(&mut self, index: u8) -> Result<u8, OrderError> {
        let count = self.counts.entry(index).or_insert(0);
        if *count >= FLOOD_MAX {
            return Err(flood_limit_exceeded(index));
        }
        *count += 1;
        Ok(*count)
    }

    /// Release one outstanding confirmation for this owner.
    pub fn release(&mut self, index: u8) {
        if let Some(count) = self.counts.get_mut(&index) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.counts.remove(&index);
            }
        }
    }

    /// Current outstanding-confirmation count for this owner.
    pub fn count(&self, index: u8) -> u8 {
        self.counts.get(&index).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_up_to_max() {
        let mut guard = FloodGuard::new();
        for i in 1..=FLOOD_MAX {
            assert_eq!(guard.try_increment(0).unwrap(), i);
        }
        assert!(matches!(
            guard.try_increment(0),
            Err(OrderError::FloodLimitExceeded { index: 0, max: 10 })
        ));
        // The failed increment must not have changed the count.
        assert_eq!(guard.count(0), FLOOD_MAX);
    }

    #[test]
    fn test_release_reopens_capacity() {
        let mut guard = FloodGuard::new();
        for _ in 0..FLOOD_MAX {
            guard.try_increment(3).unwrap();
        }
        assert!(guard.try_increment(3).is_err());

        guard.release(3);
        assert_eq!(guard.count(3), FLOOD_MAX - 1);
        assert!(guard.try_increment(3).is_ok());
    }

    #[test]
    fn test_owners_are_independent() {
        let mut guard = FloodGuard::new();
        for _ in 0..FLOOD_MAX {
            guard.try_increment(0).unwrap();
        }
        assert!(guard.try_increment(0).is_err());
        assert!(guard.try_increment(1).is_ok());
        assert_eq!(guard.count(1), 1);
    }

    #[test]
    fn test_release_on_zero_is_noop() {
        let mut guard = FloodGuard::new();
        guard.release(5);
        assert_eq!(guard.count(5), 0);
    }
}
