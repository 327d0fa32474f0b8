//! Depositor account identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An external account identity (address or principal).
///
/// The core never synthesizes one of these — the calling layer passes the
/// authenticated identity into every operation explicitly. Internally it is
/// only a key into the checkpoint store and the per-proposal voter sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Account(String);

impl Account {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Account {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
