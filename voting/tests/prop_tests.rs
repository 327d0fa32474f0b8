use proptest::prelude::*;

use flexvote_types::Weight;
use flexvote_voting::cast::scale_buckets;
use flexvote_voting::VoteTotals;

fn totals(against: u128, for_votes: u128, abstain: u128) -> VoteTotals {
    VoteTotals {
        against: Weight::new(against),
        for_votes: Weight::new(for_votes),
        abstain: Weight::new(abstain),
    }
}

proptest! {
    /// Scaled buckets never sum above the actual weight, and the deficit is
    /// bounded by 2 (one unit per independently floored nonzero remainder).
    #[test]
    fn no_over_count_under_scaling(
        against in 0u128..1_000_000_000,
        for_votes in 0u128..1_000_000_000,
        abstain in 0u128..1_000_000_000,
        actual in 0u128..1_000_000_000,
    ) {
        let t = totals(against, for_votes, abstain);
        let expressed = t.expressed_total().unwrap();
        prop_assume!(actual < expressed.raw());

        let scaled = scale_buckets(t, Weight::new(actual)).unwrap();
        let sum = scaled.expressed_total().unwrap().raw();
        prop_assert!(sum <= actual, "over-count: {sum} > {actual}");
        prop_assert!(actual - sum <= 2, "deficit {} > 2", actual - sum);
    }

    /// Without scaling, the buckets pass through exactly.
    #[test]
    fn conservation_when_actual_covers_expressed(
        against in 0u128..1_000_000_000,
        for_votes in 0u128..1_000_000_000,
        abstain in 0u128..1_000_000_000,
        surplus in 0u128..1_000_000_000,
    ) {
        let t = totals(against, for_votes, abstain);
        let expressed = t.expressed_total().unwrap();
        let actual = Weight::new(expressed.raw() + surplus);

        let out = scale_buckets(t, actual).unwrap();
        prop_assert_eq!(out, t);
        prop_assert_eq!(out.expressed_total().unwrap(), expressed);
    }

    /// Scaling each bucket individually floors: no bucket ever grows.
    #[test]
    fn scaling_never_grows_a_bucket(
        against in 0u128..1_000_000_000,
        for_votes in 0u128..1_000_000_000,
        abstain in 0u128..1_000_000_000,
        actual in 0u128..1_000_000_000,
    ) {
        let t = totals(against, for_votes, abstain);
        prop_assume!(actual < t.expressed_total().unwrap().raw());

        let scaled = scale_buckets(t, Weight::new(actual)).unwrap();
        prop_assert!(scaled.against <= t.against);
        prop_assert!(scaled.for_votes <= t.for_votes);
        prop_assert!(scaled.abstain <= t.abstain);
    }
}
