//! Amount allocation using the Largest Remainder Method.
//!
//! Every function truncates the total to the target precision first, then
//! guarantees the parts sum exactly to that truncated total:
//! 1. Calculate exact allocations
//! 2. Round each one down
//! 3. Hand the leftover units, one each, to the largest fractional parts

use rust_decimal::prelude::*;

/// Splits `total` equally across `count` recipients.
///
/// Earlier recipients receive the leftover units.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ishrakaat_core::faraid::allocation::allocate_equal;
///
/// // 100 / 3 = [33.34, 33.33, 33.33]
/// let parts = allocate_equal(dec!(100), 3, 2);
/// assert_eq!(parts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
/// ```
#[must_use]
pub fn allocate_equal(total: Decimal, count: u32, decimal_places: u32) -> Vec<Decimal> {
    if count == 0 {
        return vec![];
    }

    let total = truncate(total, decimal_places);
    let count_dec = Decimal::from(count);
    let unit = Decimal::new(1, decimal_places);

    let base = truncate(total / count_dec, decimal_places);
    let remainder = total - base * count_dec;
    let extra_count = units(remainder, unit);

    (0..count as usize)
        .map(|i| if i < extra_count { base + unit } else { base })
        .collect()
}

/// Splits `total` in proportion to non-negative `weights`.
///
/// Returns all zeros when the weights sum to zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ishrakaat_core::faraid::allocation::allocate_by_weights;
///
/// // Two sons and one daughter: 2:2:1
/// let parts = allocate_by_weights(dec!(100), &[dec!(4), dec!(1)], 2);
/// assert_eq!(parts, vec![dec!(80), dec!(20)]);
/// ```
#[must_use]
pub fn allocate_by_weights(total: Decimal, weights: &[Decimal], decimal_places: u32) -> Vec<Decimal> {
    let weight_sum: Decimal = weights.iter().copied().sum();
    if weight_sum <= Decimal::ZERO {
        return vec![Decimal::ZERO; weights.len()];
    }

    let total = truncate(total, decimal_places);
    let unit = Decimal::new(1, decimal_places);

    let exact: Vec<Decimal> = weights.iter().map(|w| total * *w / weight_sum).collect();
    let mut rounded: Vec<Decimal> = exact.iter().map(|a| truncate(*a, decimal_places)).collect();

    let sum_rounded: Decimal = rounded.iter().copied().sum();
    let units_to_distribute = units(total - sum_rounded, unit);
    if units_to_distribute == 0 {
        return rounded;
    }

    let mut remainders: Vec<(usize, Decimal)> = exact
        .iter()
        .zip(rounded.iter())
        .enumerate()
        .map(|(i, (e, r))| (i, *e - *r))
        .collect();

    // Stable sort: ties go to the earlier recipient.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    for (idx, _) in remainders.iter().take(units_to_distribute) {
        rounded[*idx] += unit;
    }

    rounded
}

fn truncate(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero)
}

fn units(remainder: Decimal, unit: Decimal) -> usize {
    (remainder / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_usize()
        .unwrap_or(0)
}
