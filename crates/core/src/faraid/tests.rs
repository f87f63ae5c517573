//! Distribution scenarios.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::{DistributionEngine, distribute};
use super::error::FaraidError;
use super::heir::{HeirCategory, HeirClaims, MAX_CLAIM_COUNT};
use super::types::{EstateInput, Fraction, MAX_ESTATE_AMOUNT, ShareLabel, ShareResult};

fn heirs(claims: &[(HeirCategory, u32)]) -> HeirClaims {
    claims.iter().copied().collect()
}

fn run(estate: Decimal, debts: Decimal, claims: &[(HeirCategory, u32)]) -> ShareResult {
    distribute(&EstateInput::new(estate, debts), &heirs(claims))
        .unwrap()
        .expect("net estate is positive")
}

fn amount(result: &ShareResult, heir: HeirCategory) -> Decimal {
    result.get(heir).map_or(Decimal::ZERO, |share| share.amount)
}

#[test]
fn test_single_wife_leaves_remainder_undistributed() {
    let result = run(dec!(1000000), dec!(0), &[(HeirCategory::Wife, 1)]);

    assert_eq!(result.shares.len(), 1);
    let wife = result.get(HeirCategory::Wife).unwrap();
    assert_eq!(wife.label, ShareLabel::Fixed(Fraction::QUARTER));
    assert_eq!(wife.amount, dec!(250000));
    assert_eq!(result.undistributed, dec!(750000));
    assert!(!result.awl_applied);
}

#[test]
fn test_husband_with_sons_and_daughter() {
    let result = run(
        dec!(1200000),
        dec!(200000),
        &[
            (HeirCategory::Husband, 1),
            (HeirCategory::Son, 2),
            (HeirCategory::Daughter, 1),
        ],
    );

    assert_eq!(result.net_estate, dec!(1000000));
    assert_eq!(amount(&result, HeirCategory::Husband), dec!(250000));

    let sons = result.get(HeirCategory::Son).unwrap();
    assert_eq!(sons.label, ShareLabel::Remainder);
    assert_eq!(sons.amount, dec!(600000));
    assert_eq!(sons.per_heir, vec![dec!(300000), dec!(300000)]);
    assert_eq!(sons.display_name, "Sons (2 ابن)");

    assert_eq!(amount(&result, HeirCategory::Daughter), dec!(150000));
    assert_eq!(result.undistributed, Decimal::ZERO);
}

#[test]
fn test_debts_consuming_estate_yield_no_distribution() {
    let claims = heirs(&[(HeirCategory::Son, 1)]);
    for debts in [dec!(500000), dec!(600000)] {
        let result = distribute(&EstateInput::new(dec!(500000), debts), &claims).unwrap();
        assert!(result.is_none());
    }
}

#[test]
fn test_shares_kept_in_computation_order() {
    let result = run(
        dec!(2400),
        dec!(0),
        &[
            (HeirCategory::Daughter, 1),
            (HeirCategory::Mother, 1),
            (HeirCategory::Father, 1),
            (HeirCategory::Wife, 1),
        ],
    );
    let order: Vec<HeirCategory> = result.shares.iter().map(|share| share.heir).collect();
    assert_eq!(
        order,
        vec![
            HeirCategory::Wife,
            HeirCategory::Father,
            HeirCategory::Mother,
            HeirCategory::Daughter,
        ]
    );
}

#[test]
fn test_father_takes_sixth_plus_remainder_with_daughter() {
    let result = run(
        dec!(1200),
        dec!(0),
        &[(HeirCategory::Daughter, 1), (HeirCategory::Father, 1)],
    );

    let father = result.get(HeirCategory::Father).unwrap();
    assert_eq!(father.label, ShareLabel::FixedPlusRemainder(Fraction::SIXTH));
    assert_eq!(father.label.to_string(), "1/6 + Remainder");
    assert_eq!(father.amount, dec!(600));
    assert_eq!(amount(&result, HeirCategory::Daughter), dec!(600));
    assert_eq!(result.undistributed, Decimal::ZERO);
}

#[test]
fn test_father_without_children_takes_remainder_after_mother() {
    let result = run(
        dec!(900),
        dec!(0),
        &[(HeirCategory::Father, 1), (HeirCategory::Mother, 1)],
    );

    assert_eq!(result.shares[0].heir, HeirCategory::Mother);
    assert_eq!(result.shares[0].label, ShareLabel::Fixed(Fraction::THIRD));
    assert_eq!(result.shares[0].amount, dec!(300));
    assert_eq!(result.shares[1].heir, HeirCategory::Father);
    assert_eq!(result.shares[1].label, ShareLabel::Remainder);
    assert_eq!(result.shares[1].amount, dec!(600));
}

#[test]
fn test_father_excludes_siblings() {
    let result = run(
        dec!(600),
        dec!(0),
        &[
            (HeirCategory::Father, 1),
            (HeirCategory::FullBrother, 2),
            (HeirCategory::UterineSister, 1),
        ],
    );

    assert_eq!(result.shares.len(), 1);
    assert_eq!(amount(&result, HeirCategory::Father), dec!(600));
}

#[test]
fn test_mother_reduced_by_two_siblings_of_any_line() {
    let result = run(
        dec!(1200),
        dec!(0),
        &[
            (HeirCategory::Mother, 1),
            (HeirCategory::PaternalBrother, 1),
            (HeirCategory::UterineSister, 1),
        ],
    );
    let mother = result.get(HeirCategory::Mother).unwrap();
    assert_eq!(mother.label, ShareLabel::Fixed(Fraction::SIXTH));
    assert_eq!(mother.amount, dec!(200));
}

#[test]
fn test_two_daughters_share_two_thirds() {
    let result = run(dec!(900), dec!(0), &[(HeirCategory::Daughter, 2)]);
    let daughters = result.get(HeirCategory::Daughter).unwrap();
    assert_eq!(daughters.label, ShareLabel::Fixed(Fraction::TWO_THIRDS));
    assert_eq!(daughters.amount, dec!(600));
    assert_eq!(daughters.per_heir, vec![dec!(300), dec!(300)]);
    assert_eq!(result.undistributed, dec!(300));
}

#[test]
fn test_several_wives_share_one_eighth() {
    let result = run(
        dec!(2400),
        dec!(0),
        &[(HeirCategory::Wife, 3), (HeirCategory::Son, 1)],
    );
    let wives = result.get(HeirCategory::Wife).unwrap();
    assert_eq!(wives.amount, dec!(300));
    assert_eq!(wives.per_heir, vec![dec!(100), dec!(100), dec!(100)]);
    assert_eq!(amount(&result, HeirCategory::Son), dec!(2100));
}

#[test]
fn test_full_brother_and_sister_split_remainder() {
    let result = run(
        dec!(1200),
        dec!(0),
        &[
            (HeirCategory::Husband, 1),
            (HeirCategory::FullBrother, 1),
            (HeirCategory::FullSister, 1),
        ],
    );
    assert_eq!(amount(&result, HeirCategory::Husband), dec!(600));
    assert_eq!(amount(&result, HeirCategory::FullBrother), dec!(400));
    assert_eq!(amount(&result, HeirCategory::FullSister), dec!(200));
    assert_eq!(result.undistributed, Decimal::ZERO);
}

#[test]
fn test_full_sister_share_taken_from_gross_estate() {
    let result = run(
        dec!(1200),
        dec!(300),
        &[(HeirCategory::FullSister, 1), (HeirCategory::Mother, 1)],
    );
    assert_eq!(result.net_estate, dec!(900));
    assert_eq!(amount(&result, HeirCategory::FullSister), dec!(600));
    assert_eq!(amount(&result, HeirCategory::Mother), dec!(300));
    assert!(!result.awl_applied);
    assert_eq!(result.undistributed, Decimal::ZERO);
}

#[test]
fn test_uterine_siblings_split_by_head_count() {
    let result = run(
        dec!(1200),
        dec!(0),
        &[
            (HeirCategory::Mother, 1),
            (HeirCategory::UterineBrother, 1),
            (HeirCategory::UterineSister, 1),
        ],
    );
    assert_eq!(amount(&result, HeirCategory::Mother), dec!(200));
    let brother = result.get(HeirCategory::UterineBrother).unwrap();
    assert_eq!(brother.label, ShareLabel::Fixed(Fraction::THIRD));
    assert_eq!(brother.amount, dec!(200));
    assert_eq!(amount(&result, HeirCategory::UterineSister), dec!(200));
    assert_eq!(result.undistributed, dec!(600));
}

#[test]
fn test_single_uterine_sibling_takes_sixth() {
    let result = run(dec!(600), dec!(0), &[(HeirCategory::UterineSister, 1)]);
    assert_eq!(amount(&result, HeirCategory::UterineSister), dec!(100));
    assert_eq!(result.undistributed, dec!(500));
}

#[test]
fn test_paternal_grandfather_takes_residue_and_excludes_uterine() {
    let result = run(
        dec!(1000),
        dec!(0),
        &[
            (HeirCategory::Wife, 1),
            (HeirCategory::PaternalGrandfather, 1),
            (HeirCategory::UterineBrother, 1),
        ],
    );
    assert_eq!(amount(&result, HeirCategory::Wife), dec!(250));
    let grandfather = result.get(HeirCategory::PaternalGrandfather).unwrap();
    assert_eq!(grandfather.label, ShareLabel::Remainder);
    assert_eq!(grandfather.amount, dec!(750));
    assert!(result.get(HeirCategory::UterineBrother).is_none());
}

#[test]
fn test_oversubscribed_shares_reduced_proportionally() {
    // 1/2 + 2/3 of the estate: the classic case that raises 6 to 7
    let result = run(
        dec!(1200),
        dec!(0),
        &[(HeirCategory::Husband, 1), (HeirCategory::FullSister, 2)],
    );

    assert!(result.awl_applied);
    assert_eq!(amount(&result, HeirCategory::Husband), dec!(514.29));
    let sisters = result.get(HeirCategory::FullSister).unwrap();
    assert_eq!(sisters.amount, dec!(685.71));
    assert_eq!(sisters.per_heir, vec![dec!(342.86), dec!(342.85)]);
    assert_eq!(result.total_distributed(), dec!(1200));
    assert_eq!(result.undistributed, Decimal::ZERO);
}

#[test]
fn test_gross_basis_over_debt_reduced_net_is_scaled() {
    let result = run(
        dec!(1200),
        dec!(600),
        &[(HeirCategory::FullSister, 2)],
    );
    // 2/3 of gross (800) exceeds the net of 600
    assert!(result.awl_applied);
    assert_eq!(amount(&result, HeirCategory::FullSister), dec!(600));
}

#[test]
fn test_fixed_shares_truncated_to_precision() {
    let result = run(
        dec!(100),
        dec!(0),
        &[(HeirCategory::Husband, 1), (HeirCategory::Mother, 1)],
    );
    assert_eq!(amount(&result, HeirCategory::Husband), dec!(50));
    assert_eq!(amount(&result, HeirCategory::Mother), dec!(33.33));
    assert_eq!(result.undistributed, dec!(16.67));
}

#[test]
fn test_precision_is_configurable() {
    let engine = DistributionEngine::new(0);
    let result = engine
        .distribute(
            &EstateInput::new(dec!(100), dec!(0)),
            &heirs(&[(HeirCategory::Mother, 1)]),
        )
        .unwrap()
        .unwrap();
    assert_eq!(amount(&result, HeirCategory::Mother), dec!(33));
    assert_eq!(result.undistributed, dec!(67));
}

#[test]
fn test_no_heirs_leaves_everything_undistributed() {
    let result = run(dec!(1000), dec!(0), &[]);
    assert!(result.shares.is_empty());
    assert_eq!(result.undistributed, dec!(1000));
}

#[test]
fn test_validation_precedes_no_distribution() {
    let claims = heirs(&[(HeirCategory::Husband, 1), (HeirCategory::Wife, 1)]);
    let result = distribute(&EstateInput::new(dec!(100), dec!(200)), &claims);
    assert_eq!(result, Err(FaraidError::ConflictingSpouses));
}

#[test]
fn test_negative_estate_rejected() {
    let result = distribute(&EstateInput::new(dec!(-1), dec!(0)), &HeirClaims::new());
    assert_eq!(
        result,
        Err(FaraidError::NegativeAmount {
            field: "estate",
            value: dec!(-1),
        })
    );
}

#[test]
fn test_count_above_maximum_rejected() {
    let claims = heirs(&[(HeirCategory::Father, 2)]);
    let result = distribute(&EstateInput::new(dec!(100), dec!(0)), &claims);
    assert!(matches!(
        result,
        Err(FaraidError::CountExceedsMaximum {
            heir: HeirCategory::Father,
            ..
        })
    ));
}

#[test]
fn test_estate_beyond_decimal_headroom_rejected() {
    let estate = EstateInput::new(dec!(60000000000000000000000000000), dec!(0));
    let result = distribute(&estate, &heirs(&[(HeirCategory::Daughter, 2)]));
    assert!(matches!(
        result,
        Err(FaraidError::AmountOutOfRange { field: "estate", .. })
    ));
}

#[test]
fn test_huge_son_count_rejected() {
    let claims = heirs(&[(HeirCategory::Son, 4_000_000_000), (HeirCategory::Daughter, 1)]);
    let result = distribute(&EstateInput::new(dec!(1000000), dec!(0)), &claims);
    assert_eq!(
        result,
        Err(FaraidError::CountOutOfRange {
            heir: HeirCategory::Son,
            count: 4_000_000_000,
            max: MAX_CLAIM_COUNT,
        })
    );
}

#[test]
fn test_largest_supported_inputs_distribute() {
    let result = run(
        MAX_ESTATE_AMOUNT,
        dec!(0),
        &[
            (HeirCategory::Husband, 1),
            (HeirCategory::Son, MAX_CLAIM_COUNT),
            (HeirCategory::Daughter, MAX_CLAIM_COUNT),
        ],
    );
    assert_eq!(result.total_distributed(), MAX_ESTATE_AMOUNT);
    let sons = result.get(HeirCategory::Son).unwrap();
    assert_eq!(sons.per_heir.len(), MAX_CLAIM_COUNT as usize);
    assert_eq!(sons.per_heir.iter().copied().sum::<Decimal>(), sons.amount);
}

#[test]
fn test_oversubscribed_largest_estate_scaled_without_overflow() {
    let result = run(
        MAX_ESTATE_AMOUNT,
        dec!(0),
        &[
            (HeirCategory::Husband, 1),
            (HeirCategory::Mother, 1),
            (HeirCategory::FullSister, 2),
            (HeirCategory::UterineBrother, 2),
        ],
    );
    assert!(result.awl_applied);
    assert_eq!(result.total_distributed(), MAX_ESTATE_AMOUNT);
}

#[test]
fn test_precision_beyond_decimal_scale_rejected() {
    let engine = DistributionEngine::new(29);
    let result = engine.distribute(
        &EstateInput::new(dec!(100), dec!(0)),
        &heirs(&[(HeirCategory::Son, 3)]),
    );
    assert_eq!(
        result,
        Err(FaraidError::UnsupportedPrecision {
            decimal_places: 29,
            max: 28,
        })
    );
}

#[test]
fn test_identical_inputs_give_identical_results() {
    let claims = heirs(&[
        (HeirCategory::Wife, 2),
        (HeirCategory::Son, 1),
        (HeirCategory::Daughter, 3),
        (HeirCategory::Mother, 1),
    ]);
    let estate = EstateInput::new(dec!(987654.32), dec!(1234.56));
    assert_eq!(
        distribute(&estate, &claims).unwrap(),
        distribute(&estate, &claims).unwrap()
    );
}
