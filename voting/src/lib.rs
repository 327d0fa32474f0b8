//! Fractional flex voting — expressed-vote aggregation and one-shot casting.
//!
//! Depositors of a pooled balance express a vote preference weighted by
//! their checkpointed share; the pool casts one aggregated, split vote to
//! the external governor inside a bounded submission window, exactly once
//! per proposal, scaled down (never up) if the pool's actual weight at cast
//! time fell below the sum of expressed weights.

pub mod cast;
pub mod engine;
pub mod error;
pub mod governor;
pub mod ledger;

pub use cast::DEFAULT_CAST_WINDOW;
pub use engine::FlexVoteEngine;
pub use error::VoteError;
pub use governor::{GovernorClient, GovernorError, PoolWeightSource};
pub use ledger::{ProposalVotes, VoteLedger, VoteTotals};
