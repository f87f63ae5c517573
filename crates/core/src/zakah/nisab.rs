//! Nisab derivation from metal market prices, and the reference amounts
//! that are fixed fractions of the gold Nisab.

use ishrakaat_shared::NisabConfig;
use ishrakaat_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use super::error::ZakahError;
use super::types::{MetalPrices, NisabRates, ReferenceAmount, ReferenceKey, SilverSource};

/// Decimal places Nisab thresholds and reference amounts are rounded to.
const NISAB_DECIMAL_PLACES: u32 = 2;

/// Physical weights behind the Nisab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NisabWeights {
    /// Grams of gold in the gold Nisab.
    pub gold_grams: Decimal,
    /// Grams of silver in the silver Nisab.
    pub silver_grams: Decimal,
    /// Grams per troy ounce.
    pub grams_per_troy_ounce: Decimal,
    /// Gold-to-silver divisor used when no silver price is known.
    pub silver_fallback_divisor: Decimal,
}

impl Default for NisabWeights {
    fn default() -> Self {
        Self::from(&NisabConfig::default())
    }
}

impl From<&NisabConfig> for NisabWeights {
    fn from(config: &NisabConfig) -> Self {
        Self {
            gold_grams: config.gold_grams,
            silver_grams: config.silver_grams,
            grams_per_troy_ounce: config.grams_per_troy_ounce,
            silver_fallback_divisor: config.silver_fallback_divisor,
        }
    }
}

impl NisabWeights {
    fn validate(&self) -> Result<(), ZakahError> {
        for (field, value) in [
            ("gold_grams", self.gold_grams),
            ("silver_grams", self.silver_grams),
            ("grams_per_troy_ounce", self.grams_per_troy_ounce),
            ("silver_fallback_divisor", self.silver_fallback_divisor),
        ] {
            if value <= Decimal::ZERO {
                return Err(ZakahError::NonPositiveWeight { field, value });
            }
        }
        Ok(())
    }
}

/// Derives the gold and silver Nisab in local currency.
///
/// The silver Nisab falls back to the gold Nisab divided by
/// `silver_fallback_divisor` when no silver price is supplied.
pub fn derive_nisab(
    prices: &MetalPrices,
    weights: &NisabWeights,
    currency: Currency,
) -> Result<NisabRates, ZakahError> {
    weights.validate()?;
    ensure_positive("gold_usd_per_ounce", prices.gold_usd_per_ounce)?;
    ensure_positive("usd_rate", prices.usd_rate)?;
    if let Some(silver) = prices.silver_usd_per_ounce {
        ensure_positive("silver_usd_per_ounce", silver)?;
    }

    let gold_nisab = local_price_per_gram(prices.gold_usd_per_ounce, prices.usd_rate, weights)
        .and_then(|per_gram| per_gram.checked_mul(weights.gold_grams))
        .ok_or(ZakahError::AmountOutOfRange { field: "gold_nisab" })?;

    let (silver_nisab, silver_source) = match prices.silver_usd_per_ounce {
        Some(silver) => (
            local_price_per_gram(silver, prices.usd_rate, weights)
                .and_then(|per_gram| per_gram.checked_mul(weights.silver_grams)),
            SilverSource::MarketPrice,
        ),
        None => (
            gold_nisab.checked_div(weights.silver_fallback_divisor),
            SilverSource::GoldRatio,
        ),
    };
    let silver_nisab = silver_nisab.ok_or(ZakahError::AmountOutOfRange {
        field: "silver_nisab",
    })?;

    Ok(NisabRates {
        gold: Money::new(gold_nisab.round_dp(NISAB_DECIMAL_PLACES), currency),
        silver: Money::new(silver_nisab.round_dp(NISAB_DECIMAL_PLACES), currency),
        silver_source,
    })
}

/// Reference amounts derived from the gold Nisab (20 dinars).
///
/// A quarter dinar is 0.0125 of the Nisab, 1000 dinars is 50 times it.
/// Returns an empty list for a zero or negative Nisab.
///
/// # Errors
///
/// Returns `ZakahError::AmountOutOfRange` when a multiple of the Nisab does
/// not fit in a `Decimal`.
pub fn reference_amounts(gold_nisab: Money) -> Result<Vec<ReferenceAmount>, ZakahError> {
    if gold_nisab.amount <= Decimal::ZERO {
        return Ok(Vec::new());
    }

    let quarter_dinar = Decimal::new(125, 4);
    let thousand_dinars = Decimal::from(50);

    [
        (ReferenceKey::Dowry, quarter_dinar),
        (ReferenceKey::MurdererFine, thousand_dinars),
        (ReferenceKey::HaddTheft, quarter_dinar),
    ]
    .into_iter()
    .map(|(key, factor)| {
        gold_nisab
            .checked_scale(factor)
            .map(|amount| ReferenceAmount {
                key,
                title: key.title().to_string(),
                amount: Money::new(amount.amount.round_dp(NISAB_DECIMAL_PLACES), amount.currency),
            })
            .ok_or(ZakahError::AmountOutOfRange { field: key.key() })
    })
    .collect()
}

fn local_price_per_gram(
    usd_per_ounce: Decimal,
    usd_rate: Decimal,
    weights: &NisabWeights,
) -> Option<Decimal> {
    usd_per_ounce
        .checked_div(weights.grams_per_troy_ounce)?
        .checked_mul(usd_rate)
}

fn ensure_positive(field: &'static str, value: Decimal) -> Result<(), ZakahError> {
    if value <= Decimal::ZERO {
        return Err(ZakahError::NonPositivePrice { field, value });
    }
    Ok(())
}
