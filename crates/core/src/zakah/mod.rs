//! Zakah calculators: wealth, livestock, crops, generic assets and Nisab.

pub mod crops;
pub mod error;
pub mod livestock;
pub mod nisab;
pub mod types;
pub mod wealth;

#[cfg(test)]
mod props;

pub use crops::{asset_zakah, crops_zakah};
pub use error::ZakahError;
pub use livestock::{camel_zakah, cattle_zakah, evaluate_livestock, sheep_zakah};
pub use nisab::{NisabWeights, derive_nisab, reference_amounts};
pub use types::{
    AssetZakah, CropsInput, CropsZakah, InKindDue, IrrigationMethod, LivestockAssessment,
    LivestockInput, LivestockKind, LivestockZakah, MetalPrices, NisabRates, NisabStandard,
    ReferenceAmount, ReferenceKey, SilverSource, ThresholdAssessment, WealthZakah,
    ZakahAnimal, ZakahWealthInput,
};
pub use wealth::wealth_zakah;

use rust_decimal::Decimal;

/// Rate applied to wealth and generic zakatable assets (2.5%).
pub const WEALTH_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Rate applied to naturally irrigated harvests (10%).
pub const NATURAL_IRRIGATION_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Rate applied to artificially irrigated harvests (5%).
pub const ARTIFICIAL_IRRIGATION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Rejects a negative monetary amount.
pub(crate) fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<(), ZakahError> {
    if value < Decimal::ZERO {
        return Err(ZakahError::NegativeAmount { field, value });
    }
    Ok(())
}
