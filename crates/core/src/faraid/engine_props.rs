//! Property-based tests for the distribution engine.
//!
//! - Shares never exceed the net estate
//! - Shares plus the undistributed balance account for the whole net estate
//! - Individual amounts sum exactly to their category amount
//! - Identical inputs give identical results

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::DistributionEngine;
use super::heir::{HeirCategory, HeirClaims};
use super::types::{EstateInput, MAX_ESTATE_AMOUNT};

/// Strategy to generate estate amounts (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate estate amounts up to the supported maximum.
fn large_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a valid count for a category.
fn count_for(heir: HeirCategory) -> BoxedStrategy<u32> {
    match heir.max_count() {
        Some(max) => (0..=max).boxed(),
        None => (0u32..6).boxed(),
    }
}

/// Strategy to generate valid heir claims with at most one kind of spouse.
fn claims() -> impl Strategy<Value = HeirClaims> {
    let counts: Vec<BoxedStrategy<u32>> = HeirCategory::ALL.into_iter().map(count_for).collect();
    (counts, any::<bool>()).prop_map(|(counts, keep_husband)| {
        let mut claims: HeirClaims = HeirCategory::ALL.into_iter().zip(counts).collect();
        let dropped = if keep_husband {
            HeirCategory::Wife
        } else {
            HeirCategory::Husband
        };
        claims.set(dropped, 0);
        claims
    })
}

fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_shares_account_for_net_estate(
        estate in amount(),
        debts in amount(),
        heirs in claims(),
        dp in decimal_places(),
    ) {
        let engine = DistributionEngine::new(dp);
        let input = EstateInput::new(estate, debts);
        let result = engine.distribute(&input, &heirs).unwrap();

        let Some(result) = result else {
            prop_assert!(net_truncates_to_zero(&input, dp));
            return Ok(());
        };

        let total = result.total_distributed();
        prop_assert!(total <= result.net_estate);
        prop_assert!(result.undistributed >= Decimal::ZERO);
        prop_assert_eq!(total + result.undistributed, result.net_estate);
        if result.awl_applied {
            prop_assert_eq!(result.undistributed, Decimal::ZERO);
        }
    }

    #[test]
    fn prop_large_estates_distribute_without_overflow(
        estate in large_amount(),
        debts in large_amount(),
        heirs in claims(),
    ) {
        prop_assert!(estate <= MAX_ESTATE_AMOUNT);
        let input = EstateInput::new(estate, debts);
        if let Some(result) = DistributionEngine::default().distribute(&input, &heirs).unwrap() {
            prop_assert_eq!(
                result.total_distributed() + result.undistributed,
                result.net_estate
            );
        }
    }

    #[test]
    fn prop_individual_amounts_sum_to_category(
        estate in amount(),
        heirs in claims(),
    ) {
        let engine = DistributionEngine::default();
        let input = EstateInput::new(estate, Decimal::ZERO);
        if let Some(result) = engine.distribute(&input, &heirs).unwrap() {
            for share in &result.shares {
                prop_assert_eq!(share.per_heir.len(), share.count as usize);
                prop_assert_eq!(share.per_heir.iter().copied().sum::<Decimal>(), share.amount);
                prop_assert!(share.amount >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn prop_distribution_is_deterministic(
        estate in amount(),
        debts in amount(),
        heirs in claims(),
    ) {
        let input = EstateInput::new(estate, debts);
        let engine = DistributionEngine::default();
        prop_assert_eq!(engine.distribute(&input, &heirs), engine.distribute(&input, &heirs));
    }
}

fn net_truncates_to_zero(input: &EstateInput, decimal_places: u32) -> bool {
    input
        .net_estate()
        .round_dp_with_strategy(decimal_places, rust_decimal::RoundingStrategy::ToZero)
        <= Decimal::ZERO
}
