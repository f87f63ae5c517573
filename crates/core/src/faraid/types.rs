//! Fara'id data types.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};

use super::error::FaraidError;
use super::heir::HeirCategory;

/// Largest estate value or debt accepted: 100 trillion.
///
/// Proportional reduction multiplies two amounts of this size, and the
/// product must still fit in a `Decimal`.
pub const MAX_ESTATE_AMOUNT: Decimal = Decimal::from_parts(276_447_232, 23_283, 0, false, 0);

/// Estate of the deceased before distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateInput {
    /// Gross value of the estate.
    pub gross_estate: Decimal,
    /// Debts and funeral costs.
    pub debts: Decimal,
}

impl EstateInput {
    /// Creates an estate input.
    #[must_use]
    pub const fn new(gross_estate: Decimal, debts: Decimal) -> Self {
        Self {
            gross_estate,
            debts,
        }
    }

    /// Estate left after debts. May be zero or negative.
    #[must_use]
    pub fn net_estate(&self) -> Decimal {
        self.gross_estate - self.debts
    }

    /// Rejects negative amounts and amounts above [`MAX_ESTATE_AMOUNT`].
    pub fn validate(&self) -> Result<(), FaraidError> {
        for (field, value) in [("estate", self.gross_estate), ("debts", self.debts)] {
            if value < Decimal::ZERO {
                return Err(FaraidError::NegativeAmount { field, value });
            }
            if value > MAX_ESTATE_AMOUNT {
                return Err(FaraidError::AmountOutOfRange {
                    field,
                    value,
                    max: MAX_ESTATE_AMOUNT,
                });
            }
        }
        Ok(())
    }
}

/// A fixed Qur'anic share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// One half.
    pub const HALF: Self = Self::new(1, 2);
    /// One quarter.
    pub const QUARTER: Self = Self::new(1, 4);
    /// One eighth.
    pub const EIGHTH: Self = Self::new(1, 8);
    /// One sixth.
    pub const SIXTH: Self = Self::new(1, 6);
    /// One third.
    pub const THIRD: Self = Self::new(1, 3);
    /// Two thirds.
    pub const TWO_THIRDS: Self = Self::new(2, 3);

    const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Applies the fraction to `amount`, truncated toward zero at
    /// `decimal_places`. `amount` must be within [`MAX_ESTATE_AMOUNT`].
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ishrakaat_core::faraid::Fraction;
    ///
    /// assert_eq!(Fraction::SIXTH.of(dec!(100), 2), dec!(16.66));
    /// assert_eq!(Fraction::TWO_THIRDS.of(dec!(100), 2), dec!(66.66));
    /// ```
    #[must_use]
    pub fn of(self, amount: Decimal, decimal_places: u32) -> Decimal {
        (amount * Decimal::from(self.numerator) / Decimal::from(self.denominator))
            .round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// How a share was arrived at. Serialized as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareLabel {
    /// A fixed fraction, e.g. `1/4`.
    Fixed(Fraction),
    /// What was left after the fixed shares.
    Remainder,
    /// A fixed fraction topped up with the remainder, e.g. `1/6 + Remainder`.
    FixedPlusRemainder(Fraction),
}

impl fmt::Display for ShareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(fraction) => write!(f, "{fraction}"),
            Self::Remainder => f.write_str("Remainder"),
            Self::FixedPlusRemainder(fraction) => write!(f, "{fraction} + Remainder"),
        }
    }
}

impl Serialize for ShareLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Share received by one heir category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Share {
    /// Heir category.
    pub heir: HeirCategory,
    /// Name shown next to the share, e.g. `Sons (2 ابن)`.
    pub display_name: String,
    /// Number of heirs in the category.
    pub count: u32,
    /// Fraction label.
    pub label: ShareLabel,
    /// Amount for the whole category.
    pub amount: Decimal,
    /// Amount for each individual heir. Sums exactly to `amount`.
    pub per_heir: Vec<Decimal>,
}

/// Outcome of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareResult {
    /// Estate after debts, at the configured precision.
    pub net_estate: Decimal,
    /// Shares in computation order.
    pub shares: Vec<Share>,
    /// Part of the net estate no heir received.
    pub undistributed: Decimal,
    /// Whether shares were reduced proportionally to fit the net estate.
    pub awl_applied: bool,
}

impl ShareResult {
    /// Share of a category, if it received one.
    #[must_use]
    pub fn get(&self, heir: HeirCategory) -> Option<&Share> {
        self.shares.iter().find(|share| share.heir == heir)
    }

    /// Sum of all shares.
    #[must_use]
    pub fn total_distributed(&self) -> Decimal {
        self.shares.iter().map(|share| share.amount).sum()
    }
}
