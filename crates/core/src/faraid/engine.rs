//! Fara'id distribution engine.
//!
//! Shares are assigned in a fixed precedence: spouse, father, mother,
//! children, full siblings, uterine siblings, then the residue. Each step
//! draws from a running `remaining` balance seeded with the net estate.
//! Full-sister and uterine-sibling shares are taken from the gross estate.

use ishrakaat_shared::MAX_DECIMAL_PLACES;
use rust_decimal::{Decimal, RoundingStrategy};

use super::allocation::{allocate_by_weights, allocate_equal};
use super::error::FaraidError;
use super::heir::{HeirCategory, HeirClaims, SiblingLine};
use super::types::{EstateInput, Fraction, Share, ShareLabel, ShareResult};

/// Default number of decimal places shares are truncated to.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Computes inheritance shares at a fixed decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionEngine {
    decimal_places: u32,
}

impl Default for DistributionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_PLACES)
    }
}

impl DistributionEngine {
    /// Creates an engine truncating shares to `decimal_places`.
    #[must_use]
    pub const fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    /// Decimal places shares are truncated to.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Distributes the estate among the declared heirs.
    ///
    /// Returns `Ok(None)` when nothing is left after debts. All input is
    /// validated before any share is computed.
    ///
    /// # Errors
    ///
    /// Returns `FaraidError` for negative or out-of-range amounts, counts
    /// above a category maximum or the supported range, a husband and wife
    /// declared together, or a precision above 28 decimal places.
    pub fn distribute(
        &self,
        estate: &EstateInput,
        heirs: &HeirClaims,
    ) -> Result<Option<ShareResult>, FaraidError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(FaraidError::UnsupportedPrecision {
                decimal_places: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }
        estate.validate()?;
        heirs.validate()?;

        let net = estate
            .net_estate()
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::ToZero);
        if net <= Decimal::ZERO {
            return Ok(None);
        }

        let mut run = Distribution {
            decimal_places: self.decimal_places,
            gross: estate.gross_estate,
            net,
            remaining: net,
            heirs,
            entries: Vec::new(),
        };
        run.spouse();
        run.father();
        run.mother();
        run.descendants();
        run.full_siblings();
        run.uterine_siblings();
        run.residue();

        Ok(Some(run.finish()))
    }
}

/// Distributes with the default precision.
///
/// # Errors
///
/// See [`DistributionEngine::distribute`].
pub fn distribute(
    estate: &EstateInput,
    heirs: &HeirClaims,
) -> Result<Option<ShareResult>, FaraidError> {
    DistributionEngine::default().distribute(estate, heirs)
}

struct Entry {
    heir: HeirCategory,
    label: ShareLabel,
    amount: Decimal,
}

struct Distribution<'a> {
    decimal_places: u32,
    gross: Decimal,
    net: Decimal,
    remaining: Decimal,
    heirs: &'a HeirClaims,
    entries: Vec<Entry>,
}

impl Distribution<'_> {
    fn spouse(&mut self) {
        let descendants = self.heirs.has_descendants();
        if self.heirs.has(HeirCategory::Husband) {
            let fraction = if descendants {
                Fraction::QUARTER
            } else {
                Fraction::HALF
            };
            self.fixed(HeirCategory::Husband, fraction, self.net);
        } else if self.heirs.has(HeirCategory::Wife) {
            let fraction = if descendants {
                Fraction::EIGHTH
            } else {
                Fraction::QUARTER
            };
            self.fixed(HeirCategory::Wife, fraction, self.net);
        }
    }

    /// Without children the father's share is left to the residue step.
    fn father(&mut self) {
        if self.heirs.has(HeirCategory::Father) && self.heirs.has_descendants() {
            self.fixed(HeirCategory::Father, Fraction::SIXTH, self.net);
        }
    }

    fn mother(&mut self) {
        if !self.heirs.has(HeirCategory::Mother) {
            return;
        }
        let fraction = if self.heirs.has_descendants() || self.heirs.sibling_count() >= 2 {
            Fraction::SIXTH
        } else {
            Fraction::THIRD
        };
        self.fixed(HeirCategory::Mother, fraction, self.net);
    }

    fn descendants(&mut self) {
        if self.heirs.has(HeirCategory::Son) {
            self.split_remainder(HeirCategory::Son, HeirCategory::Daughter);
        } else if self.heirs.has(HeirCategory::Daughter) {
            let fraction = one_or_more(self.heirs.count(HeirCategory::Daughter));
            self.fixed(HeirCategory::Daughter, fraction, self.net);
        }
    }

    fn full_siblings(&mut self) {
        if self.heirs.has_descendants() || self.heirs.has(HeirCategory::Father) {
            return;
        }
        if self.heirs.has(HeirCategory::FullBrother) {
            self.split_remainder(HeirCategory::FullBrother, HeirCategory::FullSister);
        } else if self.heirs.has(HeirCategory::FullSister) {
            let fraction = one_or_more(self.heirs.count(HeirCategory::FullSister));
            self.fixed(HeirCategory::FullSister, fraction, self.gross);
        }
    }

    fn uterine_siblings(&mut self) {
        if self.heirs.has_descendants()
            || self.heirs.has(HeirCategory::Father)
            || self.heirs.has(HeirCategory::PaternalGrandfather)
        {
            return;
        }
        let uterine = self.heirs.sibling_count_on(SiblingLine::Uterine);
        if uterine == 0 {
            return;
        }

        let fraction = if uterine == 1 {
            Fraction::SIXTH
        } else {
            Fraction::THIRD
        };
        let total = fraction.of(self.gross, self.decimal_places);

        // Split by head count, brothers and sisters alike.
        let members: Vec<HeirCategory> = [HeirCategory::UterineBrother, HeirCategory::UterineSister]
            .into_iter()
            .filter(|heir| self.heirs.has(*heir))
            .collect();
        let weights: Vec<Decimal> = members
            .iter()
            .map(|heir| Decimal::from(self.heirs.count(*heir)))
            .collect();
        let amounts = allocate_by_weights(total, &weights, self.decimal_places);

        for (heir, amount) in members.into_iter().zip(amounts) {
            self.entries.push(Entry {
                heir,
                label: ShareLabel::Fixed(fraction),
                amount,
            });
        }
        self.remaining -= total;
    }

    /// Hands any positive balance to the father, else the paternal
    /// grandfather. Otherwise it stays undistributed.
    fn residue(&mut self) {
        if self.remaining <= Decimal::ZERO || self.heirs.has(HeirCategory::Son) {
            return;
        }

        if self.heirs.has(HeirCategory::Father) {
            let remaining = self.remaining;
            match self
                .entries
                .iter_mut()
                .find(|entry| entry.heir == HeirCategory::Father)
            {
                Some(entry) => {
                    entry.amount += remaining;
                    if let ShareLabel::Fixed(fraction) = entry.label {
                        entry.label = ShareLabel::FixedPlusRemainder(fraction);
                    }
                }
                None => self.entries.push(Entry {
                    heir: HeirCategory::Father,
                    label: ShareLabel::Remainder,
                    amount: remaining,
                }),
            }
            self.remaining = Decimal::ZERO;
        } else if self.heirs.has(HeirCategory::PaternalGrandfather) {
            self.entries.push(Entry {
                heir: HeirCategory::PaternalGrandfather,
                label: ShareLabel::Remainder,
                amount: self.remaining,
            });
            self.remaining = Decimal::ZERO;
        }
    }

    fn fixed(&mut self, heir: HeirCategory, fraction: Fraction, base: Decimal) {
        let amount = fraction.of(base, self.decimal_places);
        self.entries.push(Entry {
            heir,
            label: ShareLabel::Fixed(fraction),
            amount,
        });
        self.remaining -= amount;
    }

    /// Males take twice the female portion of whatever is left.
    fn split_remainder(&mut self, male: HeirCategory, female: HeirCategory) {
        let members: Vec<HeirCategory> = [male, female]
            .into_iter()
            .filter(|heir| self.heirs.has(*heir))
            .collect();
        let weights: Vec<Decimal> = members
            .iter()
            .map(|heir| {
                let count = Decimal::from(self.heirs.count(*heir));
                if *heir == male { count * Decimal::TWO } else { count }
            })
            .collect();
        let pool = self.remaining.max(Decimal::ZERO);
        let amounts = allocate_by_weights(pool, &weights, self.decimal_places);

        for (heir, amount) in members.into_iter().zip(amounts) {
            self.entries.push(Entry {
                heir,
                label: ShareLabel::Remainder,
                amount,
            });
        }
        self.remaining = Decimal::ZERO;
    }

    fn finish(self) -> ShareResult {
        let mut amounts: Vec<Decimal> = self.entries.iter().map(|entry| entry.amount).collect();
        let total: Decimal = amounts.iter().copied().sum();

        // Over-subscribed shares are scaled down together to fit the net estate.
        let awl_applied = total > self.net;
        let undistributed = if awl_applied {
            amounts = allocate_by_weights(self.net, &amounts, self.decimal_places);
            Decimal::ZERO
        } else {
            self.net - total
        };

        let shares = self
            .entries
            .into_iter()
            .zip(amounts)
            .map(|(entry, amount)| {
                let count = self.heirs.count(entry.heir);
                Share {
                    heir: entry.heir,
                    display_name: entry.heir.display_name(count),
                    count,
                    label: entry.label,
                    amount,
                    per_heir: allocate_equal(amount, count, self.decimal_places),
                }
            })
            .collect();

        ShareResult {
            net_estate: self.net,
            shares,
            undistributed,
            awl_applied,
        }
    }
}

fn one_or_more(count: u32) -> Fraction {
    if count == 1 {
        Fraction::HALF
    } else {
        Fraction::TWO_THIRDS
    }
}
