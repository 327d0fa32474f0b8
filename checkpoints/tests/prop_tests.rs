use proptest::prelude::*;

use flexvote_checkpoints::{CheckpointSeries, RawBalanceAdapter};
use flexvote_types::{Account, BlockNumber, Weight};

/// Linear-scan reference for the floor lookup.
fn reference_lookup(points: &[(u64, u128)], target: u64) -> u128 {
    points
        .iter()
        .filter(|(b, _)| *b <= target)
        .last()
        .map(|(_, v)| *v)
        .unwrap_or(0)
}

/// Strictly increasing block numbers paired with arbitrary values.
fn checkpoint_points() -> impl Strategy<Value = Vec<(u64, u128)>> {
    proptest::collection::vec((1u64..10_000, 0u128..1_000_000_000), 0..40).prop_map(|mut v| {
        v.sort_by_key(|(b, _)| *b);
        v.dedup_by_key(|(b, _)| *b);
        v
    })
}

proptest! {
    /// Binary-search floor lookup agrees with a linear scan everywhere.
    #[test]
    fn floor_lookup_matches_reference(
        points in checkpoint_points(),
        target in 0u64..12_000,
    ) {
        let mut series = CheckpointSeries::new();
        for &(b, v) in &points {
            series.write(BlockNumber::new(b), Weight::new(v)).unwrap();
        }
        prop_assert_eq!(
            series.lookup(BlockNumber::new(target)).raw(),
            reference_lookup(&points, target)
        );
    }

    /// Repeated writes at one block leave exactly one entry, last value wins.
    #[test]
    fn same_block_overwrite_keeps_last(
        block in 1u64..1_000,
        values in proptest::collection::vec(0u128..1_000_000, 1..10),
    ) {
        let mut series = CheckpointSeries::new();
        for &v in &values {
            series.write(BlockNumber::new(block), Weight::new(v)).unwrap();
        }
        prop_assert_eq!(series.len(), 1);
        prop_assert_eq!(
            series.lookup(BlockNumber::new(block)),
            Weight::new(*values.last().unwrap())
        );
    }

    /// At every finalized block, the total series equals the sum of every
    /// account's series at that block.
    #[test]
    fn total_is_sum_of_accounts(
        events in proptest::collection::vec(
            (0usize..4, 0u128..1_000_000),
            1..30,
        ),
    ) {
        let accounts: Vec<Account> =
            (0..4).map(|i| Account::new(format!("acct-{i}"))).collect();
        let mut adapter = RawBalanceAdapter::new();
        // One event per block keeps writes monotonic.
        for (height, (who, raw)) in events.iter().enumerate() {
            let block = BlockNumber::new(height as u64 + 1);
            adapter
                .on_balance_changed(&accounts[*who], Weight::new(*raw), block)
                .unwrap();
        }

        let current = BlockNumber::new(events.len() as u64 + 1);
        for height in 1..=events.len() as u64 {
            let at = BlockNumber::new(height);
            let sum: u128 = accounts
                .iter()
                .map(|a| adapter.store().past_weight(a, at, current).unwrap().raw())
                .sum();
            let total = adapter.store().past_total_weight(at, current).unwrap();
            prop_assert_eq!(total.raw(), sum);
        }
    }
}

#[test]
fn snapshot_restore_preserves_history() {
    let mut adapter = RawBalanceAdapter::new();
    let a = Account::new("a");
    let b = Account::new("b");
    adapter.apply_deposit(&a, Weight::new(100), BlockNumber::new(1)).unwrap();
    adapter.apply_deposit(&b, Weight::new(50), BlockNumber::new(2)).unwrap();
    adapter.apply_withdrawal(&a, Weight::new(25), BlockNumber::new(3)).unwrap();

    let bytes = bincode::serialize(&adapter).unwrap();
    let restored: RawBalanceAdapter = bincode::deserialize(&bytes).unwrap();

    let current = BlockNumber::new(10);
    assert_eq!(
        restored.store().past_weight(&a, BlockNumber::new(2), current).unwrap(),
        Weight::new(100)
    );
    assert_eq!(restored.store().latest_weight(&a), Weight::new(75));
    assert_eq!(restored.store().latest_total(), Weight::new(125));
}
