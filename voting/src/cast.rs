//! Casting policy: the submission window and proportional bucket scaling.

use crate::error::VoteError;
use crate::ledger::VoteTotals;
use flexvote_checkpoints::CheckpointError;
use flexvote_types::{BlockNumber, Weight};

/// Blocks before the external deadline during which casting is allowed.
///
/// A bounded window keeps expression open as long as possible while leaving
/// room to submit (and retry a failed submission) before the deadline.
pub const DEFAULT_CAST_WINDOW: u64 = 20;

/// Reject casts before `deadline − window`. Lateness is not checked here:
/// the external governor is authoritative for its own deadline and its
/// rejection surfaces as `TooLateToCast`.
pub fn check_window(
    current: BlockNumber,
    deadline: BlockNumber,
    window: u64,
) -> Result<(), VoteError> {
    let opens_at = deadline.saturating_sub(window);
    if current < opens_at {
        return Err(VoteError::TooEarlyToCast { current, opens_at });
    }
    Ok(())
}

/// Scale the expressed buckets down to the pool's actual weight.
///
/// When `actual < expressed`, each bucket becomes
/// `floor(bucket × actual / expressed)`. Flooring all three buckets
/// identically guarantees the scaled sum never exceeds `actual` — the sum
/// may fall short by at most 2 units, an accepted rounding loss; an
/// over-count is never possible. When `actual >= expressed` the buckets pass
/// through unscaled and any excess pool weight is simply abandoned.
pub fn scale_buckets(totals: VoteTotals, actual: Weight) -> Result<VoteTotals, VoteError> {
    let expressed = totals.expressed_total()?;
    if actual >= expressed || expressed.is_zero() {
        return Ok(totals);
    }
    let scale = |bucket: Weight| -> Result<Weight, VoteError> {
        let scaled = bucket
            .raw()
            .checked_mul(actual.raw())
            .ok_or(CheckpointError::ValueOverflow)?
            / expressed.raw();
        Ok(Weight::new(scaled))
    };
    Ok(VoteTotals {
        against: scale(totals.against)?,
        for_votes: scale(totals.for_votes)?,
        abstain: scale(totals.abstain)?,
    })
}
