//! Crops and generic-asset Zakah.
//!
//! Neither is gated by a Nisab threshold: Zakah applies from the first unit.

use rust_decimal::Decimal;

use super::error::ZakahError;
use super::types::{AssetZakah, CropsInput, CropsZakah, IrrigationMethod};
use super::{ARTIFICIAL_IRRIGATION_RATE, NATURAL_IRRIGATION_RATE, WEALTH_RATE, ensure_non_negative};

impl IrrigationMethod {
    /// Rate applied to a harvest irrigated this way.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::Natural => NATURAL_IRRIGATION_RATE,
            Self::Artificial => ARTIFICIAL_IRRIGATION_RATE,
        }
    }
}

/// Zakah on a harvest: 10% when naturally irrigated, 5% otherwise.
pub fn crops_zakah(input: &CropsInput) -> Result<CropsZakah, ZakahError> {
    ensure_non_negative("crops_value", input.value)?;

    let rate = input.irrigation.rate();
    Ok(CropsZakah {
        value: input.value,
        irrigation: input.irrigation,
        rate,
        due: input.value * rate,
    })
}

/// Flat 2.5% on any other declared zakatable asset.
pub fn asset_zakah(value: Decimal) -> Result<AssetZakah, ZakahError> {
    ensure_non_negative("asset_value", value)?;

    Ok(AssetZakah {
        value,
        rate: WEALTH_RATE,
        due: value * WEALTH_RATE,
    })
}
