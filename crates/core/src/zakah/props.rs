//! Property-based tests for the Zakah calculators.
//!
//! - Wealth Zakah is 2.5% at or above the threshold and zero below it
//! - Wealth Zakah never decreases as wealth grows
//! - Livestock tables account for every animal they resolve

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::livestock::{camel_zakah, cattle_zakah, sheep_zakah};
use super::types::{ZakahAnimal, ZakahWealthInput};
use super::wealth::wealth_zakah;
use super::WEALTH_RATE;

/// Strategy to generate non-negative amounts (0.00 to 100,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_wealth_due_matches_threshold(
        wealth in amount(),
        gold in amount(),
        silver in amount(),
    ) {
        let result = wealth_zakah(&ZakahWealthInput {
            wealth,
            nisab_gold: gold,
            nisab_silver: silver,
        })
        .unwrap();

        for assessment in [result.gold, result.silver] {
            if wealth >= assessment.threshold {
                prop_assert!(assessment.meets_nisab);
                prop_assert_eq!(assessment.due, wealth * WEALTH_RATE);
            } else {
                prop_assert!(!assessment.meets_nisab);
                prop_assert_eq!(assessment.due, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn prop_wealth_due_is_monotonic(
        low in amount(),
        extra in amount(),
        threshold in amount(),
    ) {
        let due = |wealth| {
            wealth_zakah(&ZakahWealthInput {
                wealth,
                nisab_gold: threshold,
                nisab_silver: threshold,
            })
            .unwrap()
            .gold
            .due
        };
        prop_assert!(due(low) <= due(low + extra));
    }

    /// Camels above 120 resolve into 40s and 50s, and the remainder is
    /// always below 40.
    #[test]
    fn prop_camel_decomposition_accounts_for_herd(count in 121u32..5_000) {
        let result = camel_zakah(count);
        let resolved = 40 * result.quantity_of(ZakahAnimal::BintLabun)
            + 50 * result.quantity_of(ZakahAnimal::Hiqqah);
        prop_assert_eq!(120 + resolved + result.unresolved_remainder, count);
        prop_assert!(result.unresolved_remainder < 40);
    }

    #[test]
    fn prop_cattle_decomposition_accounts_for_herd(count in 30u32..5_000) {
        let result = cattle_zakah(count);
        let resolved = 30 * result.quantity_of(ZakahAnimal::Tabi)
            + 40 * result.quantity_of(ZakahAnimal::Musinnah);
        prop_assert_eq!(resolved + result.unresolved_remainder, count);
        prop_assert!(result.unresolved_remainder < 30);
        prop_assert!(!result.dues.is_empty());
    }

    #[test]
    fn prop_sheep_due_never_decreases(count in 0u32..10_000) {
        let here = sheep_zakah(count).total_animals();
        let next = sheep_zakah(count + 1).total_animals();
        prop_assert!(here <= next);
    }
}
