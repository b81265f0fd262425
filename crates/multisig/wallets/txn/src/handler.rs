use stakewell_multisig_common::{
    Admittance, HandleOutcome, MsgRelayer, OrderError, TreasuryMsg,
};
use stakewell_multisig_txs::{
    actions::TxnAction,
    envelope::{ExternalEnvelope, InternalEnvelope},
    QueryId, Sighash,
};
use stakewell_primitives::AccountAddress;
use tracing::{info, warn};

use crate::{error::TxnWalletError, state::TxnWalletState};

/// Processes an internal-channel message from `sender`.
pub fn handle_internal(
    state: &mut TxnWalletState,
    sender: &AccountAddress,
    bytes: &[u8],
    now: u32,
    relayer: &mut impl MsgRelayer<TreasuryMsg>,
) -> Result<HandleOutcome, TxnWalletError> {
    let envelope = InternalEnvelope::decode(bytes)?;
    if envelope.wallet_id() != state.wallet_id() {
        return Err(OrderError::WalletIdMismatch {
            got: envelope.wallet_id(),
            expected: state.wallet_id(),
        }
        .into());
    }

    let action = TxnAction::decode(envelope.payload())?;
    let query_id = envelope.query_id();
    let sighash = action.compute_sighash(query_id);

    match state
        .gate_mut()
        .admit_internal(sender, query_id, &sighash, now)?
    {
        Admittance::Accumulated {
            confirmations,
            required,
        } => Ok(HandleOutcome::Accumulated {
            query_id,
            confirmations,
            required,
        }),
        Admittance::Authenticated(order) => {
            dispatch(state, &action, query_id, relayer);
            state.gate_mut().finalize(&order);
            Ok(HandleOutcome::Executed(query_id))
        }
    }
}

/// Processes an external-channel order bundle.
pub fn handle_external(
    state: &mut TxnWalletState,
    bytes: &[u8],
    now: u32,
    relayer: &mut impl MsgRelayer<TreasuryMsg>,
) -> Result<HandleOutcome, TxnWalletError> {
    let envelope = ExternalEnvelope::decode(bytes)?;
    let action = TxnAction::decode(envelope.payload())?;
    let query_id = envelope.query_id();
    let sighash = action.compute_sighash(query_id);

    let order = state
        .gate_mut()
        .admit_external(query_id, &sighash, envelope.signatures(), now)?;
    dispatch(state, &action, query_id, relayer);
    state.gate_mut().finalize(&order);
    Ok(HandleOutcome::Executed(query_id))
}

/// Forwards one authenticated treasury action.
fn dispatch(
    state: &TxnWalletState,
    action: &TxnAction,
    query_id: QueryId,
    relayer: &mut impl MsgRelayer<TreasuryMsg>,
) {
    match action {
        TxnAction::Deposit(deposit) => {
            let msg = TreasuryMsg::Deposit {
                validator_address: *deposit.validator_address(),
                reward_percent_bp: deposit.reward_percent_bp(),
                max_holders: deposit.max_holders(),
                min_validator_stake: deposit.min_validator_stake(),
                min_holder_stake: deposit.min_holder_stake(),
                wallet_id: state.wallet_id(),
                amount: deposit.amount(),
            };
            let recipient = *state.recipient();
            relayer.relay_msg(query_id, recipient, msg);
            info!(
                %query_id,
                validator = %deposit.validator_address(),
                amount = deposit.amount(),
                "forwarded deposit instruction to treasury"
            );
        }
    }
}

/// Reconciles a bounced treasury message.
///
/// Deposits mutate no local bookkeeping when they are sent, so a bounce
/// leaves nothing to repair; the query id stays burned and owners authorize
/// a fresh order to retry.
pub fn handle_bounce(state: &TxnWalletState, query_id: QueryId, _msg: &TreasuryMsg) {
    warn!(
        wallet_id = state.wallet_id(),
        %query_id,
        "treasury bounced deposit instruction"
    );
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use ed25519_dalek::SigningKey;
    use stakewell_multisig_common::{flood::FLOOD_MAX, MockRelayer, MultisigParams, Owner};
    use stakewell_multisig_txs::{
        actions::DepositAction,
        test_utils::{create_external_order, create_internal_order, owner_keys, signing_keys},
    };

    use super::*;

    const WALLET: u32 = 2;
    const NOW: u32 = 1_700_000_000;

    fn owner_addr(i: u8) -> AccountAddress {
        AccountAddress::from([i + 0x40; 32])
    }

    fn treasury_addr() -> AccountAddress {
        AccountAddress::from([0xDD; 32])
    }

    fn setup(n: usize, k: u8) -> (Vec<SigningKey>, TxnWalletState) {
        let sks = signing_keys(n);
        let owners: Vec<Owner> = owner_keys(&sks)
            .into_iter()
            .enumerate()
            .map(|(i, pk)| Owner::new(pk, owner_addr(i as u8)))
            .collect();
        let params =
            MultisigParams::new(owners, NonZero::new(k).unwrap(), WALLET, treasury_addr());
        let state = TxnWalletState::new(&params).unwrap();
        (sks, state)
    }

    fn qid(deadline: u32) -> QueryId {
        QueryId::pack(WALLET, deadline)
    }

    fn deposit(amount: u64) -> TxnAction {
        TxnAction::Deposit(DepositAction::new(
            AccountAddress::from([0x55; 32]),
            500,
            40_000,
            10_000_000,
            1_000,
            amount,
        ))
    }

    #[test]
    fn test_external_deposit_dispatches() {
        let (sks, mut state) = setup(3, 2);
        let mut relayer = MockRelayer::new();
        let action = deposit(5_000_000);

        let bytes = create_external_order(&sks, &[0, 2], &action, qid(NOW + 3600));
        let outcome = handle_external(&mut state, &bytes, NOW, &mut relayer).unwrap();
        assert_eq!(outcome, HandleOutcome::Executed(qid(NOW + 3600)));

        assert_eq!(relayer.messages().len(), 1);
        let (query_id, recipient, msg) = &relayer.messages()[0];
        assert_eq!(*query_id, qid(NOW + 3600));
        assert_eq!(recipient, &treasury_addr());
        match msg {
            TreasuryMsg::Deposit {
                wallet_id, amount, ..
            } => {
                assert_eq!(*wallet_id, WALLET);
                assert_eq!(*amount, 5_000_000);
            }
        }
    }

    #[test]
    fn test_external_underquorum_fails() {
        let (sks, mut state) = setup(3, 3);
        let mut relayer = MockRelayer::new();
        let action = deposit(1);

        let bytes = create_external_order(&sks, &[0, 1], &action, qid(NOW + 3600));
        let err = handle_external(&mut state, &bytes, NOW, &mut relayer).unwrap_err();
        assert_eq!(err.code(), 38);
        assert!(relayer.messages().is_empty());
    }

    #[test]
    fn test_internal_quorum_dispatches_once() {
        let (_, mut state) = setup(3, 3);
        let mut relayer = MockRelayer::new();
        let action = deposit(42);
        let query_id = qid(NOW + 3600);
        let bytes = create_internal_order(WALLET, query_id, &action);

        for i in [0u8, 1] {
            let outcome =
                handle_internal(&mut state, &owner_addr(i), &bytes, NOW, &mut relayer).unwrap();
            assert!(matches!(outcome, HandleOutcome::Accumulated { .. }));
            assert!(relayer.messages().is_empty());
        }

        let outcome =
            handle_internal(&mut state, &owner_addr(2), &bytes, NOW, &mut relayer).unwrap();
        assert_eq!(outcome, HandleOutcome::Executed(query_id));
        assert_eq!(relayer.messages().len(), 1);

        // A late confirmation of the executed query is a replay.
        let err =
            handle_internal(&mut state, &owner_addr(0), &bytes, NOW + 1, &mut relayer)
                .unwrap_err();
        assert!(matches!(
            err,
            TxnWalletError::Order(OrderError::AlreadyCompleted(_))
        ));
        assert_eq!(relayer.messages().len(), 1);
    }

    #[test]
    fn test_admin_payload_rejected() {
        use stakewell_multisig_txs::actions::{AdminAction, FundAction};

        let (sks, mut state) = setup(3, 2);
        let mut relayer = MockRelayer::new();
        let action = AdminAction::Fund(FundAction::SendCommission);

        let bytes = create_external_order(&sks, &[0, 1], &action, qid(NOW + 3600));
        let err = handle_external(&mut state, &bytes, NOW, &mut relayer).unwrap_err();
        assert!(matches!(err, TxnWalletError::Parse(_)));
        assert_eq!(err.code(), 41);
        assert!(relayer.messages().is_empty());
    }

    #[test]
    fn test_flood_window_scenario() {
        let (_, mut state) = setup(3, 3);
        let mut relayer = MockRelayer::new();

        // Ten distinct pending confirmations from owner 0.
        for i in 0..FLOOD_MAX as u64 {
            let query_id = qid(NOW + 100 + i as u32);
            let bytes = create_internal_order(WALLET, query_id, &deposit(i));
            handle_internal(&mut state, &owner_addr(0), &bytes, NOW, &mut relayer).unwrap();
        }
        assert_eq!(state.flood_count(0), FLOOD_MAX);

        // The eleventh is rejected and leaves no trace.
        let eleventh = qid(NOW + 500);
        let bytes = create_internal_order(WALLET, eleventh, &deposit(99));
        let err = handle_internal(&mut state, &owner_addr(0), &bytes, NOW, &mut relayer)
            .unwrap_err();
        assert!(matches!(
            err,
            TxnWalletError::Order(OrderError::FloodLimitExceeded { index: 0, .. })
        ));
        assert_eq!(err.code(), 36);
        assert_eq!(state.confirmations(eleventh), None);

        // Once the oldest pending confirmation expires, the next one
        // succeeds.
        let later = NOW + 100;
        let fresh = qid(later + 50);
        let bytes = create_internal_order(WALLET, fresh, &deposit(100));
        handle_internal(&mut state, &owner_addr(0), &bytes, later, &mut relayer).unwrap();
        assert_eq!(state.flood_count(0), FLOOD_MAX);
        assert!(relayer.messages().is_empty());
    }

    #[test]
    fn test_bounce_is_bookkeeping_neutral() {
        let (sks, mut state) = setup(3, 2);
        let mut relayer = MockRelayer::new();
        let action = deposit(7);

        let bytes = create_external_order(&sks, &[0, 1], &action, qid(NOW + 3600));
        handle_external(&mut state, &bytes, NOW, &mut relayer).unwrap();

        let (query_id, _, msg) = relayer.messages()[0].clone();
        let before = state.clone();
        handle_bounce(&state, query_id, &msg);
        assert_eq!(state, before);
        // The query stays burned; a retry needs a fresh order.
        assert!(state.is_completed(query_id));
    }
}
