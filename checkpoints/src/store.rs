//! Keyed checkpoint store: one series per account plus the pool total.

use crate::error::CheckpointError;
use crate::series::CheckpointSeries;
use flexvote_types::{Account, BlockNumber, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owns every checkpoint sequence in the system.
///
/// Written only through the raw-balance adapter; read operations that
/// resolve historical weight refuse to serve the current block, since its
/// state is not final until the block is past.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckpointStore {
    accounts: HashMap<Account, CheckpointSeries>,
    total: CheckpointSeries,
}

impl CheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Historical raw balance of `account` as of `block`.
    pub fn past_weight(
        &self,
        account: &Account,
        block: BlockNumber,
        current_block: BlockNumber,
    ) -> Result<Weight, CheckpointError> {
        self.check_final(block, current_block)?;
        Ok(self
            .accounts
            .get(account)
            .map(|series| series.lookup(block))
            .unwrap_or(Weight::ZERO))
    }

    /// Historical pool-wide total as of `block`.
    pub fn past_total_weight(
        &self,
        block: BlockNumber,
        current_block: BlockNumber,
    ) -> Result<Weight, CheckpointError> {
        self.check_final(block, current_block)?;
        Ok(self.total.lookup(block))
    }

    /// The live mirrored raw balance of `account`.
    pub fn latest_weight(&self, account: &Account) -> Weight {
        self.accounts
            .get(account)
            .map(|series| series.latest())
            .unwrap_or(Weight::ZERO)
    }

    /// The live mirrored pool-wide total.
    pub fn latest_total(&self) -> Weight {
        self.total.latest()
    }

    pub(crate) fn account_series_mut(&mut self, account: &Account) -> &mut CheckpointSeries {
        self.accounts.entry(account.clone()).or_default()
    }

    pub(crate) fn total_series_mut(&mut self) -> &mut CheckpointSeries {
        &mut self.total
    }

    pub(crate) fn account_latest_block(&self, account: &Account) -> Option<BlockNumber> {
        self.accounts.get(account).and_then(|series| series.latest_block())
    }

    pub(crate) fn total_latest_block(&self) -> Option<BlockNumber> {
        self.total.latest_block()
    }

    fn check_final(
        &self,
        block: BlockNumber,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        if block >= current_block {
            return Err(CheckpointError::NotYetFinal {
                queried: block,
                current: current_block,
            });
        }
        Ok(())
    }
}
