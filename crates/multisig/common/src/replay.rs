//! Replay and expiry guard.

use std::collections::BTreeSet;

use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_multisig_txs::QueryId;

use crate::errors::OrderError;

/// Tracks executed query ids and validates order deadlines.
///
/// The completed set is bounded by the deadline horizon: an entry whose
/// packed deadline has passed can never validate again (the deadline check
/// fires first), so it is dropped during pruning.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ReplayGuard {
    completed: BTreeSet<u64>,
}

impl ReplayGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a query id against the current time and this wallet's id.
    ///
    /// The deadline must lie strictly in the future, within `horizon_secs`
    /// of `now`, and the query must not have been executed before.
    pub fn check(
        &self,
        query_id: QueryId,
        now: u32,
        horizon_secs: u32,
        wallet_id: u32,
    ) -> Result<(), OrderError> {
        if query_id.wallet_id() != wallet_id {
            return Err(OrderError::WalletIdMismatch {
                got: query_id.wallet_id(),
                expected: wallet_id,
            });
        }

        let deadline = query_id.deadline();
        if deadline <= now {
            return Err(OrderError::StaleDeadline { deadline, now });
        }
        if deadline - now > horizon_secs {
            return Err(OrderError::DeadlineTooFar {
                deadline,
                now,
                horizon: horizon_secs,
            });
        }

        if self.completed.contains(&query_id.as_u64()) {
            return Err(OrderError::AlreadyCompleted(query_id));
        }

        Ok(())
    }

    /// Record a query id as executed.
    pub fn mark_completed(&mut self, query_id: QueryId) {
        self.completed.insert(query_id.as_u64());
    }

    pub fn is_completed(&self, query_id: QueryId) -> bool {
        self.completed.contains(&query_id.as_u64())
    }

    /// Drop completed entries whose deadline has passed.
    pub fn prune_expired(&mut self, now: u32) {
        self.completed
            .retain(|id| QueryId::from(*id).deadline() > now);
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: u32 = 7;
    const HORIZON: u32 = 64 * 60 * 60;

    fn qid(deadline: u32) -> QueryId {
        QueryId::pack(WALLET, deadline)
    }

    #[test]
    fn test_accepts_future_deadline_within_horizon() {
        let guard = ReplayGuard::new();
        let now = 1_000_000;
        // Two hours ahead.
        assert!(guard.check(qid(now + 7200), now, HORIZON, WALLET).is_ok());
    }

    #[test]
    fn test_rejects_past_deadline() {
        let guard = ReplayGuard::new();
        let now = 1_000_000;
        assert!(matches!(
            guard.check(qid(now - 1), now, HORIZON, WALLET),
            Err(OrderError::StaleDeadline { .. })
        ));
        // A deadline equal to the processing time is already expired.
        assert!(matches!(
            guard.check(qid(now), now, HORIZON, WALLET),
            Err(OrderError::StaleDeadline { .. })
        ));
    }

    #[test]
    fn test_rejects_far_future_deadline() {
        let guard = ReplayGuard::new();
        let now = 1_000_000;
        // 70 hours ahead is beyond the 64-hour horizon.
        assert!(matches!(
            guard.check(qid(now + 70 * 3600), now, HORIZON, WALLET),
            Err(OrderError::DeadlineTooFar { .. })
        ));
        // The horizon boundary itself is still acceptable.
        assert!(guard
            .check(qid(now + HORIZON), now, HORIZON, WALLET)
            .is_ok());
    }

    #[test]
    fn test_rejects_wrong_wallet_id() {
        let guard = ReplayGuard::new();
        let now = 1_000_000;
        let foreign = QueryId::pack(WALLET + 1, now + 100);
        assert!(matches!(
            guard.check(foreign, now, HORIZON, WALLET),
            Err(OrderError::WalletIdMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_completed_query() {
        let mut guard = ReplayGuard::new();
        let now = 1_000_000;
        let id = qid(now + 100);

        assert!(guard.check(id, now, HORIZON, WALLET).is_ok());
        guard.mark_completed(id);
        assert!(matches!(
            guard.check(id, now, HORIZON, WALLET),
            Err(OrderError::AlreadyCompleted(_))
        ));
    }

    #[test]
    fn test_prune_drops_expired_entries() {
        let mut guard = ReplayGuard::new();
        let now = 1_000_000;

        guard.mark_completed(qid(now + 100));
        guard.mark_completed(qid(now + 200));
        assert_eq!(guard.len(), 2);

        guard.prune_expired(now + 150);
        assert_eq!(guard.len(), 1);
        assert!(guard.is_completed(qid(now + 200)));
    }
}
