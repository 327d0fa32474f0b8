//! Proposal identifier assigned by the external governor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a proposal in the external governance contract.
///
/// Opaque to the core — proposals are created, scheduled, and executed
/// entirely by the external governor; the core only keys its expressed-vote
/// records by this identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProposalId(u64);

impl ProposalId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proposal-{}", self.0)
    }
}

impl From<u64> for ProposalId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
