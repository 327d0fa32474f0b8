//! Trait seams for the external governance contract.
//!
//! The core's only view of the outside: three governor operations plus the
//! pool's own checkpointed weight in the external governance token. All
//! three governor calls are authoritative — the core performs no independent
//! validation of proposal existence or state, and propagates their failures
//! unchanged.

use flexvote_types::{BlockNumber, ProposalId, Weight};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernorError {
    #[error("{0} is unknown to the governor")]
    UnknownProposal(ProposalId),

    #[error("governor rejected the submission for {0}: voting is closed")]
    VotingClosed(ProposalId),

    #[error("governor client error: {0}")]
    Client(String),
}

/// The external governor's proposal queries and vote submission.
pub trait GovernorClient {
    /// The block at which voting-weight eligibility was fixed.
    fn proposal_snapshot(&self, proposal: ProposalId) -> Result<BlockNumber, GovernorError>;

    /// The last block at which the governor accepts vote submissions.
    fn proposal_deadline(&self, proposal: ProposalId) -> Result<BlockNumber, GovernorError>;

    /// Submit the pool's aggregated split vote. Called at most once per
    /// proposal by this core.
    fn submit_split_vote(
        &mut self,
        proposal: ProposalId,
        against: Weight,
        for_votes: Weight,
        abstain: Weight,
    ) -> Result<(), GovernorError>;
}

/// The pool's own voting weight as checkpointed by the external
/// governance-token system.
pub trait PoolWeightSource {
    /// The pool's weight as of `block` (the proposal snapshot, at cast time).
    fn past_pool_weight(&self, block: BlockNumber) -> Result<Weight, GovernorError>;
}
