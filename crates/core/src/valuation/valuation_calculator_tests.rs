use crate::valuation::valuation_calculator::*;
use crate::valuation::{OwnershipAdjustment, ValuationPolicy};
use crate::vehicles::Vehicle;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn policy() -> ValuationPolicy {
    ValuationPolicy::default()
}

fn vehicle(miles: u32, previous_owners: u32, collisions: u32) -> Vehicle {
    Vehicle::new(dec!(35000), 36, miles, previous_owners, collisions)
}

// --- Age ---

#[test]
fn test_age_adjustment_is_flat_not_compounded() {
    // 36 months * 0.5% = 18% off, once
    assert_eq!(apply_age_adjustment(dec!(35000), 36, &policy()), dec!(28700));
}

#[test]
fn test_age_adjustment_caps_at_120_months() {
    assert_eq!(effective_months(500, &policy()), 120);
    assert_eq!(effective_months(121, &policy()), 120);
    assert_eq!(effective_months(36, &policy()), 36);
    assert_eq!(apply_age_adjustment(dec!(10000), 120, &policy()), dec!(4000));
}

#[test]
fn test_age_adjustment_new_car_keeps_price() {
    assert_eq!(apply_age_adjustment(dec!(10000), 0, &policy()), dec!(10000));
}

// --- Mileage ---

#[test]
fn test_mileage_ignores_partial_blocks() {
    assert_eq!(effective_blocks(50_999, &policy()), 50);
    assert_eq!(effective_blocks(50_000, &policy()), 50);
    assert_eq!(effective_blocks(999, &policy()), 0);
}

#[test]
fn test_mileage_adjustment_reduces_post_age_price() {
    assert_eq!(apply_mileage_adjustment(dec!(28700), 50, &policy()), dec!(25830));
}

#[test]
fn test_mileage_caps_before_flooring() {
    assert_eq!(effective_blocks(150_000, &policy()), 150);
    assert_eq!(effective_blocks(150_999, &policy()), 150);
    assert_eq!(effective_blocks(250_000, &policy()), 150);
    assert_eq!(apply_mileage_adjustment(dec!(28700), 150, &policy()), dec!(20090));
}

// --- Ownership ---

#[test]
fn test_ownership_classification() {
    let policy = policy();
    assert_eq!(OwnershipAdjustment::for_owners(0, &policy), OwnershipAdjustment::Bonus);
    assert_eq!(OwnershipAdjustment::for_owners(1, &policy), OwnershipAdjustment::None);
    assert_eq!(OwnershipAdjustment::for_owners(2, &policy), OwnershipAdjustment::None);
    assert_eq!(OwnershipAdjustment::for_owners(3, &policy), OwnershipAdjustment::Penalty);
    assert_eq!(OwnershipAdjustment::for_owners(12, &policy), OwnershipAdjustment::Penalty);
}

#[test]
fn test_owner_penalty_only_for_penalty_branch() {
    let policy = policy();
    assert_eq!(
        apply_owner_penalty(dec!(20000), OwnershipAdjustment::None, &policy),
        dec!(20000)
    );
    assert_eq!(
        apply_owner_penalty(dec!(20000), OwnershipAdjustment::Penalty, &policy),
        dec!(15000)
    );
    // The no-owner case is deferred to the bonus stage
    assert_eq!(
        apply_owner_penalty(dec!(20000), OwnershipAdjustment::Bonus, &policy),
        dec!(20000)
    );
}

#[test]
fn test_owner_bonus_only_for_bonus_branch() {
    let policy = policy();
    assert_eq!(
        apply_owner_bonus(dec!(20000), OwnershipAdjustment::Bonus, &policy),
        dec!(22000)
    );
    assert_eq!(
        apply_owner_bonus(dec!(20000), OwnershipAdjustment::None, &policy),
        dec!(20000)
    );
    assert_eq!(
        apply_owner_bonus(dec!(20000), OwnershipAdjustment::Penalty, &policy),
        dec!(20000)
    );
}

// --- Collisions ---

#[test]
fn test_collision_adjustment_below_cap() {
    assert_eq!(effective_collisions(1, &policy()), 1);
    assert_eq!(effective_collisions(4, &policy()), 4);
    assert_eq!(apply_collision_adjustment(dec!(20090), 1, &policy()), dec!(19688.20));
    assert_eq!(apply_collision_adjustment(dec!(10000), 4, &policy()), dec!(9200));
}

#[test]
fn test_collision_cap_disables_reduction() {
    assert_eq!(effective_collisions(5, &policy()), 0);
    assert_eq!(effective_collisions(9, &policy()), 0);
    assert_eq!(apply_collision_adjustment(dec!(10000), 0, &policy()), dec!(10000));
}

// --- Full pipeline ---

#[test]
fn test_reference_scenarios() {
    let policy = policy();
    let cases = [
        (vehicle(50_000, 1, 1), dec!(25313.40)),
        (vehicle(150_000, 1, 1), dec!(19688.20)),
        (vehicle(250_000, 1, 1), dec!(19688.20)),
        (vehicle(250_000, 1, 0), dec!(20090.00)),
        (vehicle(250_000, 0, 1), dec!(21657.02)),
    ];

    for (vehicle, expected) in cases {
        assert_eq!(
            calculate_valuation(&vehicle, &policy).value,
            expected,
            "unexpected value for {:?}",
            vehicle
        );
    }
}

#[test]
fn test_breakdown_records_every_stage() {
    let breakdown = calculate_valuation(&vehicle(250_000, 0, 1), &policy());

    assert_eq!(breakdown.purchase_value, dec!(35000));
    assert_eq!(breakdown.effective_months, 36);
    assert_eq!(breakdown.after_age, dec!(28700));
    assert_eq!(breakdown.effective_blocks, 150);
    assert_eq!(breakdown.after_mileage, dec!(20090));
    assert_eq!(breakdown.ownership, OwnershipAdjustment::Bonus);
    assert_eq!(breakdown.after_owner_penalty, dec!(20090));
    assert_eq!(breakdown.effective_collisions, 1);
    assert_eq!(breakdown.after_collisions, dec!(19688.20));
    assert_eq!(breakdown.after_owner_bonus, dec!(21657.02));
    assert_eq!(breakdown.value, dec!(21657.02));
}

#[test]
fn test_penalty_is_taken_before_collisions() {
    let breakdown = calculate_valuation(&vehicle(150_000, 3, 1), &policy());

    assert_eq!(breakdown.ownership, OwnershipAdjustment::Penalty);
    assert_eq!(breakdown.after_owner_penalty, dec!(15067.50));
    assert_eq!(breakdown.after_collisions, dec!(14766.15));
    assert_eq!(breakdown.after_owner_bonus, breakdown.after_collisions);
    assert_eq!(breakdown.value, dec!(14766.15));
}

#[test]
fn test_final_value_is_rounded_once_to_cents() {
    // 12345.67 * 0.995 = 12283.94165
    let vehicle = Vehicle::new(dec!(12345.67), 1, 0, 1, 0);
    let breakdown = calculate_valuation(&vehicle, &policy());

    assert_eq!(breakdown.after_owner_bonus, dec!(12283.94165));
    assert_eq!(breakdown.value, dec!(12283.94));
}

#[test]
fn test_bonus_saturates_instead_of_overflowing() {
    let vehicle = Vehicle::new(Decimal::MAX, 0, 0, 0, 0);
    let breakdown = calculate_valuation(&vehicle, &policy());

    assert_eq!(breakdown.ownership, OwnershipAdjustment::Bonus);
    assert_eq!(breakdown.after_collisions, Decimal::MAX);
    assert_eq!(breakdown.after_owner_bonus, Decimal::MAX);
    assert_eq!(breakdown.value, Decimal::MAX);
}

#[test]
fn test_largest_purchase_value_is_still_depreciated() {
    let worn = Vehicle::new(Decimal::MAX, 36, 50_000, 0, 1);
    let breakdown = calculate_valuation(&worn, &policy());

    assert!(breakdown.after_age < Decimal::MAX);
    assert!(breakdown.after_collisions < breakdown.after_mileage);
    assert!(breakdown.value > breakdown.after_collisions);
}

#[test]
fn test_collision_cutoff_recorded_in_breakdown() {
    let breakdown = calculate_valuation(&vehicle(50_000, 1, 5), &policy());

    assert_eq!(breakdown.effective_collisions, 0);
    assert_eq!(breakdown.after_collisions, breakdown.after_owner_penalty);
}
