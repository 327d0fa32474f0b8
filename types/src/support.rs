//! Vote support choices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A depositor's discrete vote preference.
///
/// The closed enum makes invalid support unrepresentable inside the core;
/// the numeric wire mapping (0 = Against, 1 = For, 2 = Abstain) exists only
/// at the boundary with the external governor and callers that speak it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteSupport {
    Against,
    For,
    Abstain,
}

impl VoteSupport {
    /// Decode a wire-level support value. Returns the raw value back as the
    /// error so callers can surface it in their own taxonomy.
    pub fn from_wire(raw: u8) -> Result<Self, u8> {
        match raw {
            0 => Ok(Self::Against),
            1 => Ok(Self::For),
            2 => Ok(Self::Abstain),
            other => Err(other),
        }
    }

    /// Encode this support for the external governor.
    pub fn wire_value(&self) -> u8 {
        match self {
            Self::Against => 0,
            Self::For => 1,
            Self::Abstain => 2,
        }
    }
}

impl fmt::Display for VoteSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Against => "against",
            Self::For => "for",
            Self::Abstain => "abstain",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_mapping_round_trips() {
        for support in [VoteSupport::Against, VoteSupport::For, VoteSupport::Abstain] {
            assert_eq!(VoteSupport::from_wire(support.wire_value()), Ok(support));
        }
    }

    #[test]
    fn invalid_wire_value_rejected() {
        assert_eq!(VoteSupport::from_wire(3), Err(3));
        assert_eq!(VoteSupport::from_wire(255), Err(255));
    }
}
