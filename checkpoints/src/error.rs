use flexvote_types::{Account, BlockNumber, Weight};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("block {queried} is not final yet (current block {current})")]
    NotYetFinal {
        queried: BlockNumber,
        current: BlockNumber,
    },

    #[error("checkpoint at {attempted} would precede latest checkpoint at {latest}")]
    BlockRegression {
        attempted: BlockNumber,
        latest: BlockNumber,
    },

    #[error("withdrawal exceeds balance for {account}: have {have}, need {need}")]
    BalanceUnderflow {
        account: Account,
        have: Weight,
        need: Weight,
    },

    #[error("checkpoint value overflow")]
    ValueOverflow,
}
