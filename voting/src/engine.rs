//! Top-level flex-voting engine.
//!
//! Owns the checkpoint state, the expressed-vote ledger, and the handle to
//! the external governor. Every public operation takes the caller's account
//! and the current block explicitly — nothing is read from ambient state —
//! and checks all of its preconditions before the first write, so a failure
//! never leaves a partial mutation behind.

use crate::cast::{check_window, scale_buckets, DEFAULT_CAST_WINDOW};
use crate::error::VoteError;
use crate::governor::{GovernorClient, GovernorError, PoolWeightSource};
use crate::ledger::{VoteLedger, VoteTotals};
use flexvote_checkpoints::{CheckpointError, RawBalanceAdapter};
use flexvote_types::{Account, BlockNumber, ProposalId, VoteSupport, Weight};

pub struct FlexVoteEngine<G> {
    balances: RawBalanceAdapter,
    ledger: VoteLedger,
    governor: G,
    cast_window: u64,
}

impl<G> FlexVoteEngine<G>
where
    G: GovernorClient + PoolWeightSource,
{
    pub fn new(governor: G) -> Self {
        Self::with_cast_window(governor, DEFAULT_CAST_WINDOW)
    }

    pub fn with_cast_window(governor: G, cast_window: u64) -> Self {
        Self {
            balances: RawBalanceAdapter::new(),
            ledger: VoteLedger::new(),
            governor,
            cast_window,
        }
    }

    pub fn governor(&self) -> &G {
        &self.governor
    }

    // --- balance plumbing (inbound notifications from the external ledger) ---

    /// The external ledger reported a new raw balance for `account`.
    pub fn on_balance_changed(
        &mut self,
        account: &Account,
        new_raw: Weight,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        self.balances.on_balance_changed(account, new_raw, current_block)
    }

    pub fn apply_deposit(
        &mut self,
        account: &Account,
        amount: Weight,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        self.balances.apply_deposit(account, amount, current_block)
    }

    pub fn apply_withdrawal(
        &mut self,
        account: &Account,
        amount: Weight,
        current_block: BlockNumber,
    ) -> Result<(), CheckpointError> {
        self.balances.apply_withdrawal(account, amount, current_block)
    }

    // --- read-only operations ---

    pub fn past_weight(
        &self,
        account: &Account,
        block: BlockNumber,
        current_block: BlockNumber,
    ) -> Result<Weight, CheckpointError> {
        self.balances.store().past_weight(account, block, current_block)
    }

    pub fn past_total_weight(
        &self,
        block: BlockNumber,
        current_block: BlockNumber,
    ) -> Result<Weight, CheckpointError> {
        self.balances.store().past_total_weight(block, current_block)
    }

    pub fn latest_weight(&self, account: &Account) -> Weight {
        self.balances.store().latest_weight(account)
    }

    /// Running expressed totals for a proposal, if anyone has expressed.
    pub fn proposal_vote_totals(&self, proposal: ProposalId) -> Option<VoteTotals> {
        self.ledger.get(proposal).map(|votes| votes.totals)
    }

    pub fn has_voted(&self, proposal: ProposalId, account: &Account) -> bool {
        self.ledger
            .get(proposal)
            .map(|votes| votes.has_voted(account))
            .unwrap_or(false)
    }

    pub fn votes_cast(&self, proposal: ProposalId) -> bool {
        self.ledger
            .get(proposal)
            .map(|votes| votes.votes_cast())
            .unwrap_or(false)
    }

    // --- core operations ---

    /// Express `account`'s preference on `proposal`, weighted by the
    /// account's checkpointed balance at the proposal snapshot.
    ///
    /// Returns the recorded weight. Expressing twice always fails, even
    /// with the same support choice.
    pub fn express_vote(
        &mut self,
        proposal: ProposalId,
        account: &Account,
        support: VoteSupport,
        current_block: BlockNumber,
    ) -> Result<Weight, VoteError> {
        // The snapshot is pinned on first expression; later expressions and
        // the cast all resolve against the same block.
        let snapshot = match self.ledger.get(proposal) {
            Some(votes) => {
                if votes.votes_cast() {
                    return Err(VoteError::VotesAlreadyCast(proposal));
                }
                if votes.has_voted(account) {
                    return Err(VoteError::AlreadyVoted(account.clone()));
                }
                votes.snapshot_block
            }
            None => self.governor.proposal_snapshot(proposal)?,
        };

        let weight = self
            .balances
            .store()
            .past_weight(account, snapshot, current_block)?;
        if weight.is_zero() {
            return Err(VoteError::NoWeight {
                account: account.clone(),
                snapshot,
            });
        }

        self.ledger
            .get_or_create(proposal, snapshot)
            .record(account, support, weight)?;

        tracing::debug!(
            proposal = %proposal,
            account = %account,
            support = %support,
            weight = %weight,
            "vote expressed"
        );
        Ok(weight)
    }

    /// Wire-boundary variant of [`express_vote`](Self::express_vote) taking
    /// the numeric support encoding.
    pub fn express_vote_wire(
        &mut self,
        proposal: ProposalId,
        account: &Account,
        raw_support: u8,
        current_block: BlockNumber,
    ) -> Result<Weight, VoteError> {
        let support = VoteSupport::from_wire(raw_support).map_err(VoteError::InvalidSupport)?;
        self.express_vote(proposal, account, support, current_block)
    }

    /// Submit the aggregated split vote to the external governor.
    ///
    /// Callable by anyone once the submission window has opened. The
    /// expressed buckets are scaled down by floor division when the pool's
    /// actual weight at the snapshot fell below the expressed total; excess
    /// actual weight is abandoned. The record is finalized only after the
    /// external call succeeds, so any submission failure leaves the proposal
    /// castable again within the window.
    pub fn cast_vote(
        &mut self,
        proposal: ProposalId,
        current_block: BlockNumber,
    ) -> Result<VoteTotals, VoteError> {
        let (snapshot, totals) = match self.ledger.get(proposal) {
            Some(votes) if votes.votes_cast() => return Err(VoteError::AlreadyCast(proposal)),
            Some(votes) if !votes.totals.is_zero() => (votes.snapshot_block, votes.totals),
            _ => return Err(VoteError::NoVotesExpressed(proposal)),
        };

        let deadline = self.governor.proposal_deadline(proposal)?;
        check_window(current_block, deadline, self.cast_window)?;

        let actual = self.governor.past_pool_weight(snapshot)?;
        let buckets = scale_buckets(totals, actual)?;

        if let Err(err) = self.governor.submit_split_vote(
            proposal,
            buckets.against,
            buckets.for_votes,
            buckets.abstain,
        ) {
            tracing::warn!(proposal = %proposal, error = %err, "governor rejected submission");
            return Err(match err {
                GovernorError::VotingClosed(id) => VoteError::TooLateToCast(id),
                other => VoteError::Governor(other),
            });
        }

        // Commit point: the external call succeeded exactly once.
        if let Some(votes) = self.ledger.get_mut(proposal) {
            votes.mark_cast();
        }

        tracing::info!(
            proposal = %proposal,
            against = %buckets.against,
            for_votes = %buckets.for_votes,
            abstain = %buckets.abstain,
            actual = %actual,
            "aggregate vote cast"
        );
        Ok(buckets)
    }
}
