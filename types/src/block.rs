//! Block number type used throughout the core.
//!
//! The execution environment provides a single, monotonically increasing
//! block height. All timeout-like behavior (snapshot eligibility, the cast
//! submission window, the external deadline) is expressed through block
//! comparisons on this type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ledger block height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockNumber(u64);

impl BlockNumber {
    /// The genesis height.
    pub const ZERO: Self = Self(0);

    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// This height minus `blocks`, clamped at genesis.
    pub fn saturating_sub(&self, blocks: u64) -> Self {
        Self(self.0.saturating_sub(blocks))
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for BlockNumber {
    fn from(height: u64) -> Self {
        Self(height)
    }
}
