//! A single account's checkpoint sequence.

use crate::error::CheckpointError;
use flexvote_types::{BlockNumber, Weight};
use serde::{Deserialize, Serialize};

/// One (block, value) entry in a checkpoint sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub block: BlockNumber,
    pub value: Weight,
}

/// An append-only checkpoint log, sorted strictly ascending by block.
///
/// At most one entry exists per block: writing at the latest entry's block
/// overwrites its value in place instead of appending. Entries are never
/// trimmed; the sequence grows for the account's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointSeries {
    entries: Vec<Checkpoint>,
}

impl CheckpointSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` as of `current_block`.
    ///
    /// Appends a new entry, or overwrites the latest entry's value when it
    /// already sits at `current_block`. History is immutable: a write below
    /// the latest entry's block fails with `BlockRegression`.
    pub fn write(
        &mut self,
        current_block: BlockNumber,
        value: Weight,
    ) -> Result<(), CheckpointError> {
        if let Some(last) = self.entries.last_mut() {
            if last.block == current_block {
                last.value = value;
                return Ok(());
            }
            if last.block > current_block {
                return Err(CheckpointError::BlockRegression {
                    attempted: current_block,
                    latest: last.block,
                });
            }
        }
        self.entries.push(Checkpoint {
            block: current_block,
            value,
        });
        Ok(())
    }

    /// Floor lookup: the value of the latest entry with block <= `block`.
    ///
    /// Returns zero for an empty series or a target before the first entry.
    /// An exact block match returns that entry's value, not the prior one.
    pub fn lookup(&self, block: BlockNumber) -> Weight {
        // partition_point yields the count of entries with block <= target,
        // i.e. one past the floor entry.
        let idx = self.entries.partition_point(|cp| cp.block <= block);
        if idx == 0 {
            Weight::ZERO
        } else {
            self.entries[idx - 1].value
        }
    }

    /// Value of the newest entry, or zero if the series is empty.
    pub fn latest(&self) -> Weight {
        self.entries.last().map(|cp| cp.value).unwrap_or(Weight::ZERO)
    }

    /// Block of the newest entry, if any.
    pub fn latest_block(&self) -> Option<BlockNumber> {
        self.entries.last().map(|cp| cp.block)
    }

    /// Number of checkpoints recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
