//! Fara'id error types.

use rust_decimal::Decimal;
use thiserror::Error;

use super::heir::HeirCategory;

/// Invalid input rejected by the distribution engine.
///
/// A net estate of zero or less is not an error: the engine returns
/// `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaraidError {
    /// The estate value or the debts were negative.
    #[error("{field} cannot be negative: {value}")]
    NegativeAmount {
        /// Name of the offending input.
        field: &'static str,
        /// Value supplied.
        value: Decimal,
    },

    /// The estate value or the debts exceeded the supported range.
    #[error("{field} exceeds the supported maximum of {max}: {value}")]
    AmountOutOfRange {
        /// Name of the offending input.
        field: &'static str,
        /// Value supplied.
        value: Decimal,
        /// Largest amount accepted.
        max: Decimal,
    },

    /// An heir count was negative.
    #[error("{heir} count cannot be negative: {count}")]
    NegativeCount {
        /// Heir category.
        heir: HeirCategory,
        /// Count supplied.
        count: i64,
    },

    /// An heir count exceeded the category maximum.
    #[error("{heir} count {count} exceeds the maximum of {max}")]
    CountExceedsMaximum {
        /// Heir category.
        heir: HeirCategory,
        /// Count supplied.
        count: i64,
        /// Largest count allowed for the category.
        max: u32,
    },

    /// An heir count exceeded the supported range of a category with no
    /// fixed maximum.
    #[error("{heir} count {count} exceeds the supported limit of {max}")]
    CountOutOfRange {
        /// Heir category.
        heir: HeirCategory,
        /// Count supplied.
        count: i64,
        /// Largest count accepted.
        max: u32,
    },

    /// The engine precision exceeded what a `Decimal` can carry.
    #[error("decimal places {decimal_places} exceed the maximum of {max}")]
    UnsupportedPrecision {
        /// Precision configured.
        decimal_places: u32,
        /// Largest precision supported.
        max: u32,
    },

    /// Both a husband and a wife were declared.
    #[error("a husband and a wife cannot both be declared")]
    ConflictingSpouses,

    /// An heir key did not match any category.
    #[error("unknown heir: {0}")]
    UnknownHeir(String),
}
