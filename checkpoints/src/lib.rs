//! Block-indexed balance checkpointing.
//!
//! Append-only, per-account logs of (block, raw balance) pairs with
//! point-in-time floor lookup, plus the adapter that turns external
//! balance-change events into checkpoint writes. Voting weight is always
//! resolved from these checkpoints, never from the external ledger's live
//! (possibly rebased) balance.

pub mod adapter;
pub mod error;
pub mod series;
pub mod store;

pub use adapter::RawBalanceAdapter;
pub use error::CheckpointError;
pub use series::{Checkpoint, CheckpointSeries};
pub use store::CheckpointStore;
