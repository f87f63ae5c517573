//! Zakah on wealth measured against the gold and silver Nisab.

use rust_decimal::Decimal;

use super::error::ZakahError;
use super::types::{NisabStandard, ThresholdAssessment, WealthZakah, ZakahWealthInput};
use super::{WEALTH_RATE, ensure_non_negative};

/// Evaluates wealth against both Nisab thresholds.
///
/// Each assessment is independent: 2.5% of the wealth is due when the wealth
/// reaches that threshold, otherwise nothing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ishrakaat_core::zakah::{ZakahWealthInput, wealth_zakah};
///
/// let result = wealth_zakah(&ZakahWealthInput {
///     wealth: dec!(1000000),
///     nisab_gold: dec!(5000000),
///     nisab_silver: dec!(480000),
/// })
/// .unwrap();
/// assert_eq!(result.gold.due, dec!(0));
/// assert_eq!(result.silver.due, dec!(25000));
/// ```
pub fn wealth_zakah(input: &ZakahWealthInput) -> Result<WealthZakah, ZakahError> {
    ensure_non_negative("wealth", input.wealth)?;
    ensure_non_negative("nisab_gold", input.nisab_gold)?;
    ensure_non_negative("nisab_silver", input.nisab_silver)?;

    Ok(WealthZakah {
        wealth: input.wealth,
        gold: assess(input.wealth, NisabStandard::Gold, input.nisab_gold),
        silver: assess(input.wealth, NisabStandard::Silver, input.nisab_silver),
    })
}

fn assess(wealth: Decimal, standard: NisabStandard, threshold: Decimal) -> ThresholdAssessment {
    let meets_nisab = wealth >= threshold;
    let due = if meets_nisab {
        wealth * WEALTH_RATE
    } else {
        Decimal::ZERO
    };

    ThresholdAssessment {
        standard,
        threshold,
        meets_nisab,
        due,
    }
}
