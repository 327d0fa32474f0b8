//! Fundamental types for fractional flex voting.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: accounts, voting weights, block numbers, proposal identifiers,
//! and the vote-support enum.

pub mod account;
pub mod block;
pub mod proposal;
pub mod support;
pub mod weight;

pub use account::Account;
pub use block::BlockNumber;
pub use proposal::ProposalId;
pub use support::VoteSupport;
pub use weight::Weight;
