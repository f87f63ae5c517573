//! Zakah error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid input rejected by the Zakah calculators.
///
/// Validation happens before any due is computed, so an error never comes
/// with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZakahError {
    /// A monetary amount was negative.
    #[error("{field} cannot be negative: {value}")]
    NegativeAmount {
        /// Name of the offending input.
        field: &'static str,
        /// Value supplied.
        value: Decimal,
    },

    /// An animal count was negative.
    #[error("{field} count cannot be negative: {value}")]
    NegativeCount {
        /// Name of the offending input.
        field: &'static str,
        /// Value supplied.
        value: i64,
    },

    /// An animal count does not fit the supported range.
    #[error("{field} count is too large: {value}")]
    CountOutOfRange {
        /// Name of the offending input.
        field: &'static str,
        /// Value supplied.
        value: i64,
    },

    /// A market price or exchange rate was zero or negative.
    #[error("{field} must be greater than zero: {value}")]
    NonPositivePrice {
        /// Name of the offending input.
        field: &'static str,
        /// Value supplied.
        value: Decimal,
    },

    /// A derived amount does not fit in a `Decimal`.
    #[error("{field} is too large to compute")]
    AmountOutOfRange {
        /// Name of the amount that overflowed.
        field: &'static str,
    },

    /// A Nisab weight or divisor was zero or negative.
    #[error("Nisab weight {field} must be greater than zero: {value}")]
    NonPositiveWeight {
        /// Name of the offending weight.
        field: &'static str,
        /// Value configured.
        value: Decimal,
    },
}
