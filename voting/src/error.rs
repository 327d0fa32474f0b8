use crate::governor::GovernorError;
use flexvote_checkpoints::CheckpointError;
use flexvote_types::{Account, BlockNumber, ProposalId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("{account} had no weight at snapshot block {snapshot}")]
    NoWeight {
        account: Account,
        snapshot: BlockNumber,
    },

    #[error("{0} has already expressed a vote on this proposal")]
    AlreadyVoted(Account),

    #[error("aggregate vote for {0} was already cast; no further expression allowed")]
    VotesAlreadyCast(ProposalId),

    #[error("invalid support value {0} (expected 0 = against, 1 = for, 2 = abstain)")]
    InvalidSupport(u8),

    #[error("aggregate vote for {0} was already cast")]
    AlreadyCast(ProposalId),

    #[error("no votes expressed for {0}")]
    NoVotesExpressed(ProposalId),

    #[error("too early to cast: current block {current}, window opens at {opens_at}")]
    TooEarlyToCast {
        current: BlockNumber,
        opens_at: BlockNumber,
    },

    #[error("too late to cast for {0}: the governor's deadline has passed")]
    TooLateToCast(ProposalId),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error(transparent)]
    Governor(#[from] GovernorError),
}
