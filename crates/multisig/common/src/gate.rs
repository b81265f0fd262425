//! Order authentication gate.
//!
//! Composes the replay guard, flood guard, quorum accumulator and threshold
//! signature verifier behind two admission entry points, one per channel.
//! Both converge on [`AuthenticatedOrder`], so wallet dispatchers handle an
//! order the same way regardless of how it was authenticated.

use borsh::{BorshDeserialize, BorshSerialize};
use stakewell_crypto::threshold_signature::{verify_threshold_signatures, SignatureSet, ThresholdConfig};
use stakewell_multisig_txs::QueryId;
use stakewell_primitives::{AccountAddress, Buf32};
use tracing::debug;

use crate::{
    confirmations::ConfirmationLedger,
    errors::OrderError,
    flood::FloodGuard,
    owners::OwnerSet,
    params::{MultisigParams, WalletConfigError},
    replay::ReplayGuard,
};

/// An order that has passed authentication on one of the two channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthenticatedOrder {
    /// Authenticated by an embedded threshold signature set.
    ExternallyVerified { query_id: QueryId },
    /// Authenticated by accumulated owner-address confirmations.
    QuorumReached { query_id: QueryId },
}

impl AuthenticatedOrder {
    pub fn query_id(&self) -> QueryId {
        match self {
            AuthenticatedOrder::ExternallyVerified { query_id }
            | AuthenticatedOrder::QuorumReached { query_id } => *query_id,
        }
    }
}

/// Result of admitting one internal-channel message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admittance {
    /// Quorum reached; the order may be dispatched.
    Authenticated(AuthenticatedOrder),
    /// Confirmation recorded, quorum not yet reached.
    Accumulated { confirmations: u8, required: u8 },
}

/// Final outcome a wallet reports for one inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleOutcome {
    /// The order authenticated and its action executed.
    Executed(QueryId),
    /// The message was accepted as a partial confirmation only.
    Accumulated {
        query_id: QueryId,
        confirmations: u8,
        required: u8,
    },
}

/// Authentication core shared by both wallet variants.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OrderGate {
    owners: OwnerSet,
    threshold: ThresholdConfig,
    wallet_id: u32,
    deadline_horizon_secs: u32,
    replay: ReplayGuard,
    flood: FloodGuard,
    confirmations: ConfirmationLedger,
}

impl OrderGate {
    /// Validate params and build a gate with empty in-flight state.
    pub fn new(params: &MultisigParams) -> Result<Self, WalletConfigError> {
        let owners = params.owner_set()?;
        let threshold = ThresholdConfig::try_new(owners.keys(), params.threshold)?;

        Ok(Self {
            owners,
            threshold,
            wallet_id: params.wallet_id,
            deadline_horizon_secs: params.deadline_horizon_secs,
            replay: ReplayGuard::new(),
            flood: FloodGuard::new(),
            confirmations: ConfirmationLedger::new(),
        })
    }

    /// Garbage-collect expired in-flight state.
    ///
    /// Ran at the start of every admission, so flood counts always reflect
    /// the sliding window of unexpired contributions.
    pub fn prune(&mut self, now: u32) {
        for (query_id, contributors) in self.confirmations.prune_expired(now) {
            for index in &contributors {
                self.flood.release(*index);
            }
            debug!(%query_id, owners = contributors.len(), "dropped expired confirmation");
        }
        self.replay.prune_expired(now);
    }

    /// Admit an external-channel order bundle.
    ///
    /// Fully authenticates in one step: replay/expiry checks, then
    /// threshold verification of the embedded signature set against the
    /// order sighash. No state is mutated on failure.
    pub fn admit_external(
        &mut self,
        query_id: QueryId,
        sighash: &Buf32,
        signatures: &SignatureSet,
        now: u32,
    ) -> Result<AuthenticatedOrder, OrderError> {
        self.prune(now);
        self.replay
            .check(query_id, now, self.deadline_horizon_secs, self.wallet_id)?;
        verify_threshold_signatures(&self.threshold, signatures.signatures(), sighash.as_bytes())?;
        Ok(AuthenticatedOrder::ExternallyVerified { query_id })
    }

    /// Admit an internal-channel message from `sender`.
    ///
    /// Either records a partial confirmation (incrementing the sender's
    /// flood count) or, if this message completes the quorum, consumes the
    /// confirmation entry and returns an authenticated order. On any
    /// failure the message leaves no trace.
    pub fn admit_internal(
        &mut self,
        sender: &AccountAddress,
        query_id: QueryId,
        sighash: &Buf32,
        now: u32,
    ) -> Result<Admittance, OrderError> {
        self.prune(now);
        self.replay
            .check(query_id, now, self.deadline_horizon_secs, self.wallet_id)?;

        let index = self
            .owners
            .index_of_address(sender)
            .ok_or(OrderError::SenderAddressNotFound(*sender))?;

        let current = self.confirmations.peek(query_id, sighash, index)?;
        let required = self.threshold.threshold();

        if current + 1 >= required {
            // Quorum crossed: consume the entry and release the flood
            // counts of the earlier contributors. The crossing sender was
            // never counted.
            self.confirmations
                .record(query_id, sighash, index, self.owners.len());
            for contributor in self.confirmations.take(query_id) {
                if contributor != index {
                    self.flood.release(contributor);
                }
            }
            Ok(Admittance::Authenticated(AuthenticatedOrder::QuorumReached {
                query_id,
            }))
        } else {
            // Cap check precedes recording so a rejected confirmation
            // leaves no state behind.
            self.flood.try_increment(index)?;
            let confirmations =
                self.confirmations
                    .record(query_id, sighash, index, self.owners.len());
            Ok(Admittance::Accumulated {
                confirmations,
                required,
            })
        }
    }

    /// Mark an authenticated order as executed.
    ///
    /// Called by the wallet only after its dispatcher succeeded, so a
    /// failed dispatch does not burn the query id.
    pub fn finalize(&mut self, order: &AuthenticatedOrder) {
        self.replay.mark_completed(order.query_id());
    }

    pub fn owners(&self) -> &OwnerSet {
        &self.owners
    }

    pub fn threshold(&self) -> u8 {
        self.threshold.threshold()
    }

    pub fn wallet_id(&self) -> u32 {
        self.wallet_id
    }

    /// Current outstanding-confirmation count for one owner.
    pub fn flood_count(&self, index: u8) -> u8 {
        self.flood.count(index)
    }

    pub fn is_completed(&self, query_id: QueryId) -> bool {
        self.replay.is_completed(query_id)
    }

    /// Confirmation count of an in-flight internal-channel order.
    pub fn confirmations(&self, query_id: QueryId) -> Option<u8> {
        self.confirmations.confirmations(query_id)
    }
}
