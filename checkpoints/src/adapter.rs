//! Raw-balance adapter — turns external balance events into checkpoints.
//!
//! The external ledger owns live balances and may rebase them (interest
//! accrual changes the displayed balance without touching principal). The
//! adapter checkpoints only the **raw** principal value: a reported balance
//! equal to the mirrored raw value writes nothing, so accrual alone never
//! creates voting weight. Reconciliation with the rebased display balance
//! happens at read time, outside this crate.

use crate::error::CheckpointError;
use crate::store::CheckpointStore;
use flexvote_types::{Account, BlockNumber, Weight};
use serde::{Deserialize, Serialize};

/// Maintains the per-account and total checkpoint series in lockstep.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawBalanceAdapter {
    store: CheckpointStore,
}

impl RawBalanceAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &CheckpointStore {
        &self.store
    }

    /// Absolute reconciliation against the external ledger's reported raw
    /// balance (mint, burn, transfer in/out, or a principal-changing rebase
    /// event). The total series is adjusted by the delta from the previous
    /// mirrored value. A report equal to the mirrored value is a no-op.
    pub fn on_balance_changed(
        &mut self,
        account: &Account,
        new_raw: Weight,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        let prev = self.store.latest_weight(account);
        if new_raw == prev {
            return Ok(());
        }

        // Validate both series up front so the two writes commit together.
        self.check_monotonic(account, current_block)?;

        let prev_total = self.store.latest_total();
        let new_total = if new_raw >= prev {
            prev_total.checked_add(new_raw - prev)
        } else {
            prev_total.checked_sub(prev - new_raw)
        }
        .ok_or(CheckpointError::ValueOverflow)?;

        self.store
            .account_series_mut(account)
            .write(current_block, new_raw)?;
        self.store.total_series_mut().write(current_block, new_total)?;

        tracing::debug!(
            account = %account,
            block = %current_block,
            raw = %new_raw,
            total = %new_total,
            "checkpoint written"
        );
        Ok(())
    }

    /// Record a deposit of `amount` raw units into `account`.
    pub fn apply_deposit(
        &mut self,
        account: &Account,
        amount: Weight,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        let prev = self.store.latest_weight(account);
        let new_raw = prev
            .checked_add(amount)
            .ok_or(CheckpointError::ValueOverflow)?;
        self.on_balance_changed(account, new_raw, current_block)
    }

    /// Record a withdrawal of `amount` raw units from `account`.
    pub fn apply_withdrawal(
        &mut self,
        account: &Account,
        amount: Weight,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        let prev = self.store.latest_weight(account);
        let new_raw = prev
            .checked_sub(amount)
            .ok_or_else(|| CheckpointError::BalanceUnderflow {
                account: account.clone(),
                have: prev,
                need: amount,
            })?;
        self.on_balance_changed(account, new_raw, current_block)
    }

    fn check_monotonic(
        &self,
        account: &Account,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        for latest in [
            self.store.account_latest_block(account),
            self.store.total_latest_block(),
        ]
        .into_iter()
        .flatten()
        {
            if latest > current_block {
                return Err(CheckpointError::BlockRegression {
                    attempted: current_block,
                    latest,
                });
            }
        }
        Ok(())
    }
}
