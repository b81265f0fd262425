use stakewell_multisig_common::{
    Admittance, EngineMsg, HandleOutcome, MsgRelayer, OrderError,
};
use stakewell_multisig_txs::{
    actions::{AdminAction, ChangeAction, FundAction},
    envelope::{ExternalEnvelope, InternalEnvelope},
    QueryId, Sighash,
};
use stakewell_primitives::AccountAddress;
use tracing::{info, warn};

use crate::{error::AdminWalletError, state::AdminWalletState};

/// Processes an internal-channel message from `sender`.
///
/// The payload is decoded before any state is touched, so an unrecognized
/// action tag aborts with no side effects. Below quorum the message only
/// records a confirmation; the message that crosses the quorum dispatches
/// the action. The query id is only burned once dispatch succeeds.
pub fn handle_internal(
    state: &mut AdminWalletState,
    sender: &AccountAddress,
    bytes: &[u8],
    now: u32,
    relayer: &mut impl MsgRelayer<EngineMsg>,
) -> Result<HandleOutcome, AdminWalletError> {
    let envelope = InternalEnvelope::decode(bytes)?;
    if envelope.wallet_id() != state.wallet_id() {
        return Err(OrderError::WalletIdMismatch {
            got: envelope.wallet_id(),
            expected: state.wallet_id(),
        }
        .into());
    }

    let action = AdminAction::decode(envelope.payload())?;
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
            dispatch(state, &action, query_id, now, relayer)?;
            state.gate_mut().finalize(&order);
            Ok(HandleOutcome::Executed(query_id))
        }
    }
}

/// Processes an external-channel order bundle.
pub fn handle_external(
    state: &mut AdminWalletState,
    bytes: &[u8],
    now: u32,
    relayer: &mut impl MsgRelayer<EngineMsg>,
) -> Result<HandleOutcome, AdminWalletError> {
    let envelope = ExternalEnvelope::decode(bytes)?;
    let action = AdminAction::decode(envelope.payload())?;
    let query_id = envelope.query_id();
    let sighash = action.compute_sighash(query_id);

    let order = state
        .gate_mut()
        .admit_external(query_id, &sighash, envelope.signatures(), now)?;
    dispatch(state, &action, query_id, now, relayer)?;
    state.gate_mut().finalize(&order);
    Ok(HandleOutcome::Executed(query_id))
}

/// Executes one authenticated admin action.
fn dispatch(
    state: &mut AdminWalletState,
    action: &AdminAction,
    query_id: QueryId,
    now: u32,
    relayer: &mut impl MsgRelayer<EngineMsg>,
) -> Result<(), AdminWalletError> {
    match action {
        AdminAction::Change(change) => handle_change(state, change, query_id, now, relayer),
        AdminAction::Cancel(cancel) => match state.pending_mut().clear(cancel.field()) {
            Some(_) => {
                info!(field = %cancel.field(), %query_id, "cancelled staged change");
                Ok(())
            }
            None => Err(AdminWalletError::NothingStaged(cancel.field())),
        },
        AdminAction::Fund(fund) => {
            let recipient = *state.recipient();
            relayer.relay_msg(query_id, recipient, engine_msg_for_fund(fund));
            info!(%query_id, op = %fund.op_type(), "forwarded fund instruction to engine");
            Ok(())
        }
    }
}

/// Walks one governed field through its stage/commit state machine.
fn handle_change(
    state: &mut AdminWalletState,
    change: &ChangeAction,
    query_id: QueryId,
    now: u32,
    relayer: &mut impl MsgRelayer<EngineMsg>,
) -> Result<(), AdminWalletError> {
    let field = change.field();
    let slot = state
        .pending()
        .get(field)
        .map(|p| (p.action().clone(), p.staged_at()));

    match slot {
        None => {
            state.pending_mut().stage(change.clone(), now);
            info!(%field, %query_id, staged_at = now, "staged configuration change");
            Ok(())
        }
        Some((_, staged_at)) if now.saturating_sub(staged_at) < state.update_delay_secs() => {
            Err(AdminWalletError::UpdateDelayNotElapsed {
                field,
                staged_at,
                now,
                required: state.update_delay_secs(),
            })
        }
        Some((staged, _)) if &staged == change => {
            state.pending_mut().clear(field);
            let recipient = *state.recipient();
            relayer.relay_msg(query_id, recipient, engine_msg_for_change(change));
            info!(%field, %query_id, "committed staged change to engine");
            Ok(())
        }
        Some(_) => {
            // Mature slot, different value: new intent restarts the
            // cool-down instead of committing.
            state.pending_mut().stage(change.clone(), now);
            warn!(%field, %query_id, "restaged change with a new value");
            Ok(())
        }
    }
}

/// Reconciles a bounced engine message.
///
/// A bounced commit restages the bounced value as immediately committable;
/// its cool-down was already served and the original query id stays burned,
/// so owners re-send the commit with a fresh order. If a newer change got
/// staged for the field in the meantime, the newer intent wins. Bounced
/// fund instructions mutated no local bookkeeping and are only logged.
pub fn handle_bounce(state: &mut AdminWalletState, query_id: QueryId, msg: &EngineMsg, now: u32) {
    match change_for_engine_msg(msg) {
        Some(change) => {
            let field = change.field();
            if state.pending().get(field).is_some() {
                warn!(%field, %query_id, "bounced commit dropped; a newer change is staged");
            } else {
                let staged_at = now.saturating_sub(state.update_delay_secs());
                state.pending_mut().stage_at(change, staged_at);
                warn!(%field, %query_id, "engine bounced commit; change restaged");
            }
        }
        None => warn!(%query_id, "engine bounced fund instruction"),
    }
}

fn engine_msg_for_change(change: &ChangeAction) -> EngineMsg {
    match change {
        ChangeAction::Admin(addr) => EngineMsg::ChangeAdmin(*addr),
        ChangeAction::TransactionAdmin(addr) => EngineMsg::ChangeTransactionAdmin(*addr),
        ChangeAction::Content(r) => EngineMsg::ChangeContent(*r),
        ChangeAction::CommissionFactor(bp) => EngineMsg::ChangeCommissionFactor(*bp),
        ChangeAction::CommissionAddress(addr) => EngineMsg::ChangeCommissionAddress(*addr),
        ChangeAction::EngineCode(r) => EngineMsg::UpgradeCode(*r),
    }
}

fn engine_msg_for_fund(fund: &FundAction) -> EngineMsg {
    match fund {
        FundAction::SendCommission => EngineMsg::SendCommission,
        FundAction::TransferHolding(t) => EngineMsg::TransferHolding {
            wallet: *t.wallet(),
            dest: *t.dest(),
            amount: t.amount(),
        },
        FundAction::ReturnBalance => EngineMsg::ReturnBalance,
    }
}

fn change_for_engine_msg(msg: &EngineMsg) -> Option<ChangeAction> {
    match msg {
        EngineMsg::ChangeAdmin(addr) => Some(ChangeAction::Admin(*addr)),
        EngineMsg::ChangeTransactionAdmin(addr) => Some(ChangeAction::TransactionAdmin(*addr)),
        EngineMsg::ChangeContent(r) => Some(ChangeAction::Content(*r)),
        EngineMsg::ChangeCommissionFactor(bp) => Some(ChangeAction::CommissionFactor(*bp)),
        EngineMsg::ChangeCommissionAddress(addr) => Some(ChangeAction::CommissionAddress(*addr)),
        EngineMsg::UpgradeCode(r) => Some(ChangeAction::EngineCode(*r)),
        EngineMsg::SendCommission | EngineMsg::TransferHolding { .. } | EngineMsg::ReturnBalance => {
            None
        }
    }
}
