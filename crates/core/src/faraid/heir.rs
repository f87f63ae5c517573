//! Heir taxonomy and declared heir counts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FaraidError;

/// Category of heir. Declaration order is the order used in the catalogue
/// and when iterating claims.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeirCategory {
    /// Husband of the deceased.
    Husband,
    /// Wife of the deceased (up to four).
    Wife,
    /// Son.
    Son,
    /// Daughter.
    Daughter,
    /// Father.
    Father,
    /// Mother.
    Mother,
    /// Father's father.
    PaternalGrandfather,
    /// Father's mother.
    PaternalGrandmother,
    /// Mother's mother.
    MaternalGrandmother,
    /// Brother sharing both parents.
    FullBrother,
    /// Sister sharing both parents.
    FullSister,
    /// Brother sharing the father only.
    PaternalBrother,
    /// Sister sharing the father only.
    PaternalSister,
    /// Brother sharing the mother only.
    UterineBrother,
    /// Sister sharing the mother only.
    UterineSister,
}

/// Group an heir category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeirGroup {
    /// Spouses.
    Immediate,
    /// Children.
    Descendants,
    /// Parents and grandparents.
    Ascendants,
    /// Brothers and sisters of every line.
    Siblings,
}

/// Parentage shared with the deceased, for siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiblingLine {
    /// Both parents.
    Full,
    /// Father only.
    Paternal,
    /// Mother only.
    Uterine,
}

impl HeirCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Husband,
        Self::Wife,
        Self::Son,
        Self::Daughter,
        Self::Father,
        Self::Mother,
        Self::PaternalGrandfather,
        Self::PaternalGrandmother,
        Self::MaternalGrandmother,
        Self::FullBrother,
        Self::FullSister,
        Self::PaternalBrother,
        Self::PaternalSister,
        Self::UterineBrother,
        Self::UterineSister,
    ];

    /// Group this category belongs to.
    #[must_use]
    pub const fn group(self) -> HeirGroup {
        match self {
            Self::Husband | Self::Wife => HeirGroup::Immediate,
            Self::Son | Self::Daughter => HeirGroup::Descendants,
            Self::Father
            | Self::Mother
            | Self::PaternalGrandfather
            | Self::PaternalGrandmother
            | Self::MaternalGrandmother => HeirGroup::Ascendants,
            Self::FullBrother
            | Self::FullSister
            | Self::PaternalBrother
            | Self::PaternalSister
            | Self::UterineBrother
            | Self::UterineSister => HeirGroup::Siblings,
        }
    }

    /// Largest count allowed, or `None` when unbounded.
    #[must_use]
    pub const fn max_count(self) -> Option<u32> {
        match self {
            Self::Wife => Some(4),
            Self::Husband
            | Self::Father
            | Self::Mother
            | Self::PaternalGrandfather
            | Self::PaternalGrandmother
            | Self::MaternalGrandmother => Some(1),
            _ => None,
        }
    }

    /// Sibling line, for sibling categories.
    #[must_use]
    pub const fn sibling_line(self) -> Option<SiblingLine> {
        match self {
            Self::FullBrother | Self::FullSister => Some(SiblingLine::Full),
            Self::PaternalBrother | Self::PaternalSister => Some(SiblingLine::Paternal),
            Self::UterineBrother | Self::UterineSister => Some(SiblingLine::Uterine),
            _ => None,
        }
    }

    /// Stable key used in JSON and config.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::PaternalGrandfather => "paternal_grandfather",
            Self::PaternalGrandmother => "paternal_grandmother",
            Self::MaternalGrandmother => "maternal_grandmother",
            Self::FullBrother => "full_brother",
            Self::FullSister => "full_sister",
            Self::PaternalBrother => "paternal_brother",
            Self::PaternalSister => "paternal_sister",
            Self::UterineBrother => "uterine_brother",
            Self::UterineSister => "uterine_sister",
        }
    }

    /// English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Husband => "Husband",
            Self::Wife => "Wife",
            Self::Son => "Son",
            Self::Daughter => "Daughter",
            Self::Father => "Father",
            Self::Mother => "Mother",
            Self::PaternalGrandfather => "Paternal Grandfather",
            Self::PaternalGrandmother => "Paternal Grandmother",
            Self::MaternalGrandmother => "Maternal Grandmother",
            Self::FullBrother => "Full Brother",
            Self::FullSister => "Full Sister",
            Self::PaternalBrother => "Paternal Brother",
            Self::PaternalSister => "Paternal Sister",
            Self::UterineBrother => "Uterine Brother",
            Self::UterineSister => "Uterine Sister",
        }
    }

    /// English plural name, used when a category may hold several heirs.
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            Self::Wife => "Wives",
            Self::Son => "Sons",
            Self::Daughter => "Daughters",
            Self::FullBrother => "Full Brothers",
            Self::FullSister => "Full Sisters",
            Self::PaternalBrother => "Paternal Brothers",
            Self::PaternalSister => "Paternal Sisters",
            Self::UterineBrother => "Uterine Brothers",
            Self::UterineSister => "Uterine Sisters",
            other => other.name(),
        }
    }

    /// Arabic name.
    #[must_use]
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Husband => "زوج",
            Self::Wife => "زوجة",
            Self::Son => "ابن",
            Self::Daughter => "بنت",
            Self::Father => "أب",
            Self::Mother => "أم",
            Self::PaternalGrandfather => "جد لأب",
            Self::PaternalGrandmother => "جدة لأب",
            Self::MaternalGrandmother => "جدة لأم",
            Self::FullBrother => "أخ شقيق",
            Self::FullSister => "أخت شقيقة",
            Self::PaternalBrother => "أخ لأب",
            Self::PaternalSister => "أخت لأب",
            Self::UterineBrother => "أخ لأم",
            Self::UterineSister => "أخت لأم",
        }
    }

    /// Name shown next to a share, e.g. `Sons (2 ابن)`, `Wife (1 زوجة)` or
    /// `Father (أب)`.
    #[must_use]
    pub fn display_name(self, count: u32) -> String {
        match self.max_count() {
            Some(1) => format!("{} ({})", self.name(), self.arabic_name()),
            _ if count == 1 => format!("{} (1 {})", self.name(), self.arabic_name()),
            _ => format!("{} ({count} {})", self.plural_name(), self.arabic_name()),
        }
    }
}

impl fmt::Display for HeirCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HeirCategory {
    type Err = FaraidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|heir| heir.key() == s)
            .ok_or_else(|| FaraidError::UnknownHeir(s.to_string()))
    }
}

/// Catalogue entry describing one heir category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeirInfo {
    /// Category key.
    pub key: HeirCategory,
    /// English name.
    pub name: &'static str,
    /// Arabic name.
    pub arabic_name: &'static str,
    /// Group.
    pub group: HeirGroup,
    /// Largest count allowed, `None` when unbounded.
    pub max_count: Option<u32>,
}

/// The fixed heir taxonomy in declaration order.
#[must_use]
pub fn catalogue() -> Vec<HeirInfo> {
    HeirCategory::ALL
        .into_iter()
        .map(|heir| HeirInfo {
            key: heir,
            name: heir.name(),
            arabic_name: heir.arabic_name(),
            group: heir.group(),
            max_count: heir.max_count(),
        })
        .collect()
}

/// Largest count accepted for a category with no fixed maximum.
pub const MAX_CLAIM_COUNT: u32 = 10_000;

/// Declared heirs with their counts. A zero count means the category is
/// absent and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeirClaims(BTreeMap<HeirCategory, u32>);

impl HeirClaims {
    /// Creates an empty set of claims.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds claims from signed counts, rejecting negative values and
    /// values above the category maximum or [`MAX_CLAIM_COUNT`]. Repeated
    /// categories are summed.
    pub fn from_signed_counts<I>(counts: I) -> Result<Self, FaraidError>
    where
        I: IntoIterator<Item = (HeirCategory, i64)>,
    {
        let mut claims = Self::new();
        for (heir, count) in counts {
            if count < 0 {
                return Err(FaraidError::NegativeCount { heir, count });
            }
            let total = i64::from(claims.count(heir)).saturating_add(count);
            let total = u32::try_from(total).map_err(|_| count_over_limit(heir, total))?;
            claims.set(heir, total);
        }
        claims.validate()?;
        Ok(claims)
    }

    /// Sets the count for a category, removing it when zero.
    pub fn set(&mut self, heir: HeirCategory, count: u32) {
        if count == 0 {
            self.0.remove(&heir);
        } else {
            self.0.insert(heir, count);
        }
    }

    /// Count declared for a category (0 when absent).
    #[must_use]
    pub fn count(&self, heir: HeirCategory) -> u32 {
        self.0.get(&heir).copied().unwrap_or(0)
    }

    /// Whether at least one heir of the category is declared.
    #[must_use]
    pub fn has(&self, heir: HeirCategory) -> bool {
        self.count(heir) > 0
    }

    /// Whether a son or daughter is declared.
    #[must_use]
    pub fn has_descendants(&self) -> bool {
        self.has(HeirCategory::Son) || self.has(HeirCategory::Daughter)
    }

    /// Number of siblings across all lines.
    #[must_use]
    pub fn sibling_count(&self) -> u64 {
        self.iter()
            .filter(|(heir, _)| heir.group() == HeirGroup::Siblings)
            .map(|(_, count)| u64::from(count))
            .sum()
    }

    /// Number of siblings on one line.
    #[must_use]
    pub fn sibling_count_on(&self, line: SiblingLine) -> u64 {
        self.iter()
            .filter(|(heir, _)| heir.sibling_line() == Some(line))
            .map(|(_, count)| u64::from(count))
            .sum()
    }

    /// Declared categories with their counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (HeirCategory, u32)> + '_ {
        self.0.iter().map(|(heir, count)| (*heir, *count))
    }

    /// Checks category maximums, the supported count range, and that at
    /// most one kind of spouse is declared.
    pub fn validate(&self) -> Result<(), FaraidError> {
        for (heir, count) in self.iter() {
            if count > heir.max_count().unwrap_or(MAX_CLAIM_COUNT) {
                return Err(count_over_limit(heir, i64::from(count)));
            }
        }
        if self.has(HeirCategory::Husband) && self.has(HeirCategory::Wife) {
            return Err(FaraidError::ConflictingSpouses);
        }
        Ok(())
    }
}

fn count_over_limit(heir: HeirCategory, count: i64) -> FaraidError {
    match heir.max_count() {
        Some(max) => FaraidError::CountExceedsMaximum { heir, count, max },
        None => FaraidError::CountOutOfRange {
            heir,
            count,
            max: MAX_CLAIM_COUNT,
        },
    }
}

impl FromIterator<(HeirCategory, u32)> for HeirClaims {
    fn from_iter<I: IntoIterator<Item = (HeirCategory, u32)>>(iter: I) -> Self {
        let mut claims = Self::new();
        for (heir, count) in iter {
            claims.set(heir, claims.count(heir).saturating_add(count));
        }
        claims
    }
}
