//! Per-proposal expressed-vote records.

use crate::error::VoteError;
use flexvote_checkpoints::CheckpointError;
use flexvote_types::{Account, BlockNumber, ProposalId, VoteSupport, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Read-only projection of the three vote buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTotals {
    pub against: Weight,
    pub for_votes: Weight,
    pub abstain: Weight,
}

impl VoteTotals {
    /// Checked sum of the three buckets.
    pub fn expressed_total(&self) -> Result<Weight, CheckpointError> {
        self.against
            .checked_add(self.for_votes)
            .and_then(|sum| sum.checked_add(self.abstain))
            .ok_or(CheckpointError::ValueOverflow)
    }

    pub fn is_zero(&self) -> bool {
        self.against.is_zero() && self.for_votes.is_zero() && self.abstain.is_zero()
    }
}

/// Everything the core tracks about one proposal.
///
/// Created lazily on the first expression. The snapshot block is fetched
/// from the governor once and pinned here, so every expression and the final
/// cast resolve weight against the same block.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalVotes {
    pub proposal_id: ProposalId,
    /// Block at which voting-weight eligibility was fixed by the governor.
    pub snapshot_block: BlockNumber,
    /// Running totals of expressed weight.
    pub totals: VoteTotals,
    /// Accounts that have expressed; guards against double expression.
    voters: HashSet<Account>,
    /// Set once the aggregate vote has been submitted; terminal.
    votes_cast: bool,
}

impl ProposalVotes {
    pub fn new(proposal_id: ProposalId, snapshot_block: BlockNumber) -> Self {
        Self {
            proposal_id,
            snapshot_block,
            totals: VoteTotals::default(),
            voters: HashSet::new(),
            votes_cast: false,
        }
    }

    pub fn has_voted(&self, account: &Account) -> bool {
        self.voters.contains(account)
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn votes_cast(&self) -> bool {
        self.votes_cast
    }

    /// Record one account's expressed preference.
    ///
    /// All preconditions are checked before the first write, so a failure
    /// leaves the record untouched.
    pub fn record(
        &mut self,
        account: &Account,
        support: VoteSupport,
        weight: Weight,
    ) -> Result<(), VoteError> {
        if self.votes_cast {
            return Err(VoteError::VotesAlreadyCast(self.proposal_id));
        }
        if self.voters.contains(account) {
            return Err(VoteError::AlreadyVoted(account.clone()));
        }
        let bucket = match support {
            VoteSupport::Against => &self.totals.against,
            VoteSupport::For => &self.totals.for_votes,
            VoteSupport::Abstain => &self.totals.abstain,
        };
        let new_bucket = bucket
            .checked_add(weight)
            .ok_or(CheckpointError::ValueOverflow)?;

        // Commit point: both writes or neither.
        self.voters.insert(account.clone());
        match support {
            VoteSupport::Against => self.totals.against = new_bucket,
            VoteSupport::For => self.totals.for_votes = new_bucket,
            VoteSupport::Abstain => self.totals.abstain = new_bucket,
        }
        Ok(())
    }

    /// Finalize the record after a successful external submission.
    pub fn mark_cast(&mut self) {
        self.votes_cast = true;
    }
}

/// All per-proposal records, keyed by proposal identifier.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoteLedger {
    proposals: HashMap<ProposalId, ProposalVotes>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, proposal: ProposalId) -> Option<&ProposalVotes> {
        self.proposals.get(&proposal)
    }

    pub fn get_mut(&mut self, proposal: ProposalId) -> Option<&mut ProposalVotes> {
        self.proposals.get_mut(&proposal)
    }

    /// Fetch the record for `proposal`, creating it with `snapshot_block` on
    /// first use.
    pub fn get_or_create(
        &mut self,
        proposal: ProposalId,
        snapshot_block: BlockNumber,
    ) -> &mut ProposalVotes {
        self.proposals
            .entry(proposal)
            .or_insert_with(|| ProposalVotes::new(proposal, snapshot_block))
    }
}
