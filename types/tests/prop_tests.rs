use proptest::prelude::*;

use flexvote_types::{BlockNumber, Weight};

proptest! {
    /// Checked addition agrees with u128 addition whenever it succeeds.
    #[test]
    fn weight_checked_add_matches_raw(a in any::<u128>(), b in any::<u128>()) {
        let sum = Weight::new(a).checked_add(Weight::new(b));
        match a.checked_add(b) {
            Some(raw) => prop_assert_eq!(sum, Some(Weight::new(raw))),
            None => prop_assert_eq!(sum, None),
        }
    }

    /// Subtracting what was added returns the original weight.
    #[test]
    fn weight_add_sub_inverse(a in 0u128..u128::MAX / 2, b in 0u128..u128::MAX / 2) {
        let w = Weight::new(a).checked_add(Weight::new(b)).unwrap();
        prop_assert_eq!(w.checked_sub(Weight::new(b)), Some(Weight::new(a)));
    }

    /// Saturating subtraction never underflows.
    #[test]
    fn weight_saturating_sub_floor(a in any::<u128>(), b in any::<u128>()) {
        let d = Weight::new(a).saturating_sub(Weight::new(b));
        if b >= a {
            prop_assert_eq!(d, Weight::ZERO);
        } else {
            prop_assert_eq!(d, Weight::new(a - b));
        }
    }

    /// Block-number ordering matches the underlying height ordering.
    #[test]
    fn block_number_ordering(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(BlockNumber::new(a) < BlockNumber::new(b), a < b);
    }
}
