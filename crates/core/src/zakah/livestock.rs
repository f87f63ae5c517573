//! Livestock Zakah tables for camels, cattle and sheep/goats.
//!
//! Livestock Zakah is paid in kind, so these evaluators return animals due,
//! never a currency amount. Herd sizes the tables cannot decompose are
//! reported through `unresolved_remainder` for a detailed fiqh reference.

use super::types::{
    InKindDue, LivestockAssessment, LivestockInput, LivestockKind, LivestockZakah, ZakahAnimal,
};

const FIQH_ADVISORY: &str = "Follow detailed fiqh for this number.";

/// Evaluates Zakah on a herd of camels.
#[must_use]
pub fn camel_zakah(count: u32) -> LivestockZakah {
    if count < 5 {
        return nothing_due(LivestockKind::Camel, count, 5);
    }

    if count <= 120 {
        let (animal, quantity) = match count {
            5..=9 => (ZakahAnimal::Sheep, 1),
            10..=14 => (ZakahAnimal::Sheep, 2),
            15..=19 => (ZakahAnimal::Sheep, 3),
            20..=24 => (ZakahAnimal::Sheep, 4),
            25..=35 => (ZakahAnimal::BintMakhad, 1),
            36..=45 => (ZakahAnimal::BintLabun, 1),
            46..=60 => (ZakahAnimal::Hiqqah, 1),
            61..=75 => (ZakahAnimal::Jadhaah, 1),
            76..=90 => (ZakahAnimal::BintLabun, 2),
            _ => (ZakahAnimal::Hiqqah, 2),
        };
        let due = InKindDue::new(animal, quantity);
        // Singular she-camel dues carry their age, as in "1 hiqqah (3-year-old she-camel)".
        let text = if quantity == 1 { due.long() } else { due.short() };
        return LivestockZakah {
            kind: LivestockKind::Camel,
            count,
            dues: vec![due],
            unresolved_remainder: 0,
            description: format!("{text}."),
        };
    }

    let mut remaining = count - 120;
    let mut bint_labun = 0;
    let mut hiqqah = 0;

    while remaining >= 40 {
        if remaining % 50 == 0 {
            hiqqah += remaining / 50;
            remaining = 0;
        } else if remaining % 40 == 0 {
            bint_labun += remaining / 40;
            remaining = 0;
        } else if remaining > 50 {
            hiqqah += 1;
            remaining -= 50;
        } else {
            bint_labun += 1;
            remaining -= 40;
        }
    }

    let dues = collect_dues(&[
        (ZakahAnimal::BintLabun, bint_labun),
        (ZakahAnimal::Hiqqah, hiqqah),
    ]);
    decomposed(LivestockKind::Camel, count, dues, remaining, InKindDue::short)
}

/// Evaluates Zakah on a herd of cows/buffalo.
#[must_use]
pub fn cattle_zakah(count: u32) -> LivestockZakah {
    if count < 30 {
        return nothing_due(LivestockKind::Cattle, count, 30);
    }

    let mut remaining = count;
    let mut tabi = 0;
    let mut musinnah = 0;

    while remaining >= 30 {
        match remaining {
            30 | 60 | 90 => {
                tabi += remaining / 30;
                remaining = 0;
            }
            40 | 80 => {
                musinnah += remaining / 40;
                remaining = 0;
            }
            r if r >= 40 => {
                musinnah += 1;
                remaining -= 40;
            }
            _ => {
                tabi += 1;
                remaining -= 30;
            }
        }
    }

    let dues = collect_dues(&[(ZakahAnimal::Tabi, tabi), (ZakahAnimal::Musinnah, musinnah)]);
    decomposed(LivestockKind::Cattle, count, dues, remaining, InKindDue::long)
}

/// Evaluates Zakah on a flock of sheep/goats.
#[must_use]
pub fn sheep_zakah(count: u32) -> LivestockZakah {
    if count < 40 {
        return nothing_due(LivestockKind::Sheep, count, 40);
    }

    let quantity = match count {
        40..=120 => 1,
        121..=200 => 2,
        201..=399 => 3,
        _ => count / 100,
    };
    let due = InKindDue::new(ZakahAnimal::Sheep, quantity);

    LivestockZakah {
        kind: LivestockKind::Sheep,
        count,
        description: format!("{}.", due.short()),
        dues: vec![due],
        unresolved_remainder: 0,
    }
}

/// Evaluates all three classes independently.
#[must_use]
pub fn evaluate_livestock(input: &LivestockInput) -> LivestockAssessment {
    LivestockAssessment {
        camels: camel_zakah(input.camels),
        cattle: cattle_zakah(input.cattle),
        sheep: sheep_zakah(input.sheep),
    }
}

fn nothing_due(kind: LivestockKind, count: u32, minimum: u32) -> LivestockZakah {
    LivestockZakah {
        kind,
        count,
        dues: Vec::new(),
        unresolved_remainder: 0,
        description: format!("No Zakah on {} below {minimum}.", kind.plural()),
    }
}

fn collect_dues(quantities: &[(ZakahAnimal, u32)]) -> Vec<InKindDue> {
    quantities
        .iter()
        .filter(|(_, quantity)| *quantity > 0)
        .map(|(animal, quantity)| InKindDue::new(*animal, *quantity))
        .collect()
}

fn decomposed(
    kind: LivestockKind,
    count: u32,
    dues: Vec<InKindDue>,
    remaining: u32,
    render: fn(&InKindDue) -> String,
) -> LivestockZakah {
    let mut description = if dues.is_empty() {
        format!("For {count} {}: {FIQH_ADVISORY}", kind.plural())
    } else {
        let parts: Vec<String> = dues.iter().map(render).collect();
        format!("For {count} {}: {}.", kind.plural(), parts.join(" and "))
    };
    if !dues.is_empty() && remaining > 0 {
        description.push_str(&format!(
            " Follow detailed fiqh for the remaining {remaining}."
        ));
    }

    LivestockZakah {
        kind,
        count,
        dues,
        unresolved_remainder: remaining,
        description,
    }
}
