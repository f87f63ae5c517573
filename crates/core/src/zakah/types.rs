//! Zakah data types.

use ishrakaat_shared::types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ZakahError;

// ============================================================================
// Wealth
// ============================================================================

/// Input for the wealth Zakah evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakahWealthInput {
    /// Total zakatable wealth (cash, gold, silver, trade goods).
    pub wealth: Decimal,
    /// Nisab threshold measured in gold.
    pub nisab_gold: Decimal,
    /// Nisab threshold measured in silver.
    pub nisab_silver: Decimal,
}

/// Metal that a Nisab threshold is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NisabStandard {
    /// 85 grams of gold.
    Gold,
    /// 595 grams of silver.
    Silver,
}

/// Wealth compared against a single Nisab threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdAssessment {
    /// Metal the threshold is measured in.
    pub standard: NisabStandard,
    /// Threshold amount.
    pub threshold: Decimal,
    /// Whether the wealth reaches the threshold.
    pub meets_nisab: bool,
    /// Zakah due (2.5% of wealth when the threshold is met, else zero).
    pub due: Decimal,
}

/// Side-by-side gold and silver assessments. Choosing one is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthZakah {
    /// Wealth assessed.
    pub wealth: Decimal,
    /// Assessment against the gold Nisab.
    pub gold: ThresholdAssessment,
    /// Assessment against the silver Nisab.
    pub silver: ThresholdAssessment,
}

// ============================================================================
// Livestock
// ============================================================================

/// Class of livestock, each with its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivestockKind {
    /// Camels.
    Camel,
    /// Cows and buffalo.
    Cattle,
    /// Sheep and goats.
    Sheep,
}

impl LivestockKind {
    /// Plural used in result descriptions.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Camel => "camels",
            Self::Cattle => "cows",
            Self::Sheep => "sheep/goats",
        }
    }
}

/// Animal given as in-kind Zakah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZakahAnimal {
    /// A sheep or goat.
    Sheep,
    /// One-year-old she-camel.
    BintMakhad,
    /// Two-year-old she-camel.
    BintLabun,
    /// Three-year-old she-camel.
    Hiqqah,
    /// Four-year-old she-camel.
    Jadhaah,
    /// One-year-old calf.
    Tabi,
    /// Two-year-old calf.
    Musinnah,
}

impl ZakahAnimal {
    /// Traditional name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sheep => "sheep",
            Self::BintMakhad => "bint makhad",
            Self::BintLabun => "bint labun",
            Self::Hiqqah => "hiqqah",
            Self::Jadhaah => "jadha'ah",
            Self::Tabi => "tabi'",
            Self::Musinnah => "musinnah",
        }
    }

    /// Age description, if the name alone does not convey it.
    #[must_use]
    pub const fn age_note(self) -> Option<&'static str> {
        match self {
            Self::Sheep => None,
            Self::BintMakhad => Some("1-year-old she-camel"),
            Self::BintLabun => Some("2-year-old she-camel"),
            Self::Hiqqah => Some("3-year-old she-camel"),
            Self::Jadhaah => Some("4-year-old she-camel"),
            Self::Tabi => Some("1-year-old"),
            Self::Musinnah => Some("2-year-old"),
        }
    }
}

/// A quantity of one kind of animal due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InKindDue {
    /// Animal due.
    pub animal: ZakahAnimal,
    /// Number of animals.
    pub quantity: u32,
}

impl InKindDue {
    /// Creates a new due.
    #[must_use]
    pub const fn new(animal: ZakahAnimal, quantity: u32) -> Self {
        Self { animal, quantity }
    }

    /// Short form, e.g. `2 bint labun`.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{} {}", self.quantity, self.animal.name())
    }

    /// Long form with the age note, e.g. `1 tabi' (1-year-old)`.
    #[must_use]
    pub fn long(&self) -> String {
        match self.animal.age_note() {
            Some(note) => format!("{} ({note})", self.short()),
            None => self.short(),
        }
    }
}

/// In-kind Zakah due on one class of livestock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockZakah {
    /// Class evaluated.
    pub kind: LivestockKind,
    /// Number of animals owned.
    pub count: u32,
    /// Animals due, in table order. Empty when nothing is due.
    pub dues: Vec<InKindDue>,
    /// Part of the herd the tables could not resolve (0 when fully resolved).
    pub unresolved_remainder: u32,
    /// Human-readable result.
    pub description: String,
}

impl LivestockZakah {
    /// Whether part of the herd needs a detailed fiqh reference.
    #[must_use]
    pub const fn needs_fiqh_reference(&self) -> bool {
        self.unresolved_remainder > 0
    }

    /// Total number of animals due across all kinds.
    #[must_use]
    pub fn total_animals(&self) -> u32 {
        self.dues.iter().map(|d| d.quantity).sum()
    }

    /// Quantity of a specific animal due.
    #[must_use]
    pub fn quantity_of(&self, animal: ZakahAnimal) -> u32 {
        self.dues
            .iter()
            .filter(|d| d.animal == animal)
            .map(|d| d.quantity)
            .sum()
    }
}

/// Herd sizes, evaluated independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockInput {
    /// Number of camels.
    pub camels: u32,
    /// Number of cows/buffalo.
    pub cattle: u32,
    /// Number of sheep/goats.
    pub sheep: u32,
}

impl LivestockInput {
    /// Builds an input from signed counts, rejecting negative or oversized values.
    pub fn try_from_counts(camels: i64, cattle: i64, sheep: i64) -> Result<Self, ZakahError> {
        Ok(Self {
            camels: to_count("camels", camels)?,
            cattle: to_count("cattle", cattle)?,
            sheep: to_count("sheep", sheep)?,
        })
    }
}

fn to_count(field: &'static str, value: i64) -> Result<u32, ZakahError> {
    if value < 0 {
        return Err(ZakahError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_| ZakahError::CountOutOfRange { field, value })
}

/// Results for all three livestock classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockAssessment {
    /// Camel result.
    pub camels: LivestockZakah,
    /// Cattle result.
    pub cattle: LivestockZakah,
    /// Sheep/goat result.
    pub sheep: LivestockZakah,
}

// ============================================================================
// Crops and other assets
// ============================================================================

/// How a harvest was irrigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    /// Rain, rivers or springs (10%).
    Natural,
    /// Irrigated at a cost (5%).
    Artificial,
}

/// Input for the crops Zakah evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropsInput {
    /// Value of the harvest.
    pub value: Decimal,
    /// Irrigation method.
    pub irrigation: IrrigationMethod,
}

/// Crops Zakah result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropsZakah {
    /// Value of the harvest.
    pub value: Decimal,
    /// Irrigation method.
    pub irrigation: IrrigationMethod,
    /// Rate applied.
    pub rate: Decimal,
    /// Zakah due.
    pub due: Decimal,
}

/// Generic zakatable asset result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetZakah {
    /// Declared asset value.
    pub value: Decimal,
    /// Rate applied.
    pub rate: Decimal,
    /// Zakah due.
    pub due: Decimal,
}

// ============================================================================
// Nisab
// ============================================================================

/// Metal market prices used to derive Nisab thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalPrices {
    /// Gold price per troy ounce in USD.
    pub gold_usd_per_ounce: Decimal,
    /// Silver price per troy ounce in USD, when available.
    pub silver_usd_per_ounce: Option<Decimal>,
    /// Units of local currency per USD.
    pub usd_rate: Decimal,
}

/// Where the silver Nisab came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SilverSource {
    /// Derived from the silver market price.
    MarketPrice,
    /// Derived from the gold Nisab by a fixed ratio.
    GoldRatio,
}

/// Nisab thresholds in local currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisabRates {
    /// Gold Nisab.
    pub gold: Money,
    /// Silver Nisab.
    pub silver: Money,
    /// Where the silver Nisab came from.
    pub silver_source: SilverSource,
}

/// Key of a Nisab-derived reference amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKey {
    /// Minimum dowry, a quarter dinar.
    Dowry,
    /// Blood money (diyah), 1000 dinars.
    MurdererFine,
    /// Theft threshold for the hadd punishment, a quarter dinar.
    HaddTheft,
}

impl ReferenceKey {
    /// Serialized key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dowry => "dowry",
            Self::MurdererFine => "murderer_fine",
            Self::HaddTheft => "hadd_theft",
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dowry => "Minimum Dowry (Rub'u Dinar)",
            Self::MurdererFine => "Blood Money (Diyyah - 1000 Dinars)",
            Self::HaddTheft => "Nisab for Theft",
        }
    }
}

/// A reference amount derived from the gold Nisab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAmount {
    /// Key.
    pub key: ReferenceKey,
    /// Display title.
    pub title: String,
    /// Amount.
    pub amount: Money,
}
