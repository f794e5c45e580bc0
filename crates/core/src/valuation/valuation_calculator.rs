use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MILES_PER_BLOCK};
use crate::valuation::{OwnershipAdjustment, ValuationBreakdown, ValuationPolicy};
use crate::vehicles::Vehicle;

/// Runs the full depreciation pipeline for one vehicle.
///
/// The order is fixed: age, mileage, ownership penalty, collisions, then the
/// ownership bonus. A penalty is taken before collisions and a bonus after.
///
/// # Arguments
///
/// * `vehicle` - The vehicle being valued.
/// * `policy` - Rates and caps for each stage.
///
pub fn calculate_valuation(vehicle: &Vehicle, policy: &ValuationPolicy) -> ValuationBreakdown {
    let effective_months = effective_months(vehicle.age_in_months, policy);
    let after_age = apply_age_adjustment(vehicle.purchase_value, effective_months, policy);
    debug!(
        "Age adjustment: {} months (effective {}) -> {}",
        vehicle.age_in_months, effective_months, after_age
    );

    let effective_blocks = effective_blocks(vehicle.miles, policy);
    let after_mileage = apply_mileage_adjustment(after_age, effective_blocks, policy);
    debug!(
        "Mileage adjustment: {} miles (effective {} blocks) -> {}",
        vehicle.miles, effective_blocks, after_mileage
    );

    let ownership = OwnershipAdjustment::for_owners(vehicle.previous_owners, policy);
    let after_owner_penalty = apply_owner_penalty(after_mileage, ownership, policy);
    debug!(
        "Owner penalty: {} previous owners ({:?}) -> {}",
        vehicle.previous_owners, ownership, after_owner_penalty
    );

    let effective_collisions = effective_collisions(vehicle.collisions, policy);
    let after_collisions =
        apply_collision_adjustment(after_owner_penalty, effective_collisions, policy);
    debug!(
        "Collision adjustment: {} collisions (effective {}) -> {}",
        vehicle.collisions, effective_collisions, after_collisions
    );

    let after_owner_bonus = apply_owner_bonus(after_collisions, ownership, policy);
    debug!("Owner bonus ({:?}) -> {}", ownership, after_owner_bonus);

    let value = after_owner_bonus.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );

    ValuationBreakdown {
        purchase_value: vehicle.purchase_value,
        effective_months,
        after_age,
        effective_blocks,
        after_mileage,
        ownership,
        after_owner_penalty,
        effective_collisions,
        after_collisions,
        after_owner_bonus,
        value,
    }
}

/// Age in months, capped at the policy maximum.
pub fn effective_months(age_in_months: u32, policy: &ValuationPolicy) -> u32 {
    age_in_months.min(policy.age_cap_months)
}

/// Full 1,000-mile blocks driven. Miles are capped before flooring.
pub fn effective_blocks(miles: u32, policy: &ValuationPolicy) -> u32 {
    miles.min(policy.mileage_cap_miles) / MILES_PER_BLOCK
}

/// Collisions that count toward the reduction. Reaching the cap disables the
/// reduction entirely rather than freezing it, so this is zero at or above it.
pub fn effective_collisions(collisions: u32, policy: &ValuationPolicy) -> u32 {
    if collisions >= policy.collision_cap {
        0
    } else {
        collisions
    }
}

/// Reduces the price by the per-month rate for each effective month of age.
pub fn apply_age_adjustment(
    price: Decimal,
    effective_months: u32,
    policy: &ValuationPolicy,
) -> Decimal {
    reduce_by(price, Decimal::from(effective_months) * policy.age_rate_per_month)
}

/// Reduces the price by the per-block rate for each effective 1,000-mile block.
pub fn apply_mileage_adjustment(
    price: Decimal,
    effective_blocks: u32,
    policy: &ValuationPolicy,
) -> Decimal {
    reduce_by(price, Decimal::from(effective_blocks) * policy.mileage_rate_per_block)
}

/// Takes the flat ownership penalty. Vehicles with no previous owners are
/// handled later by [`apply_owner_bonus`].
pub fn apply_owner_penalty(
    price: Decimal,
    ownership: OwnershipAdjustment,
    policy: &ValuationPolicy,
) -> Decimal {
    match ownership {
        OwnershipAdjustment::Penalty => reduce_by(price, policy.owner_penalty_rate),
        _ => price,
    }
}

/// Reduces the price by the per-collision rate for each effective collision.
pub fn apply_collision_adjustment(
    price: Decimal,
    effective_collisions: u32,
    policy: &ValuationPolicy,
) -> Decimal {
    reduce_by(price, Decimal::from(effective_collisions) * policy.collision_rate)
}

/// Adds the no-owner bonus to the post-collision price.
pub fn apply_owner_bonus(
    price: Decimal,
    ownership: OwnershipAdjustment,
    policy: &ValuationPolicy,
) -> Decimal {
    match ownership {
        OwnershipAdjustment::Bonus => {
            price.saturating_mul(Decimal::ONE + policy.no_owner_bonus_rate)
        }
        _ => price,
    }
}

/// Flat multiplicative reduction: `price * (1 - fraction)`.
fn reduce_by(price: Decimal, fraction: Decimal) -> Decimal {
    price.saturating_mul(Decimal::ONE - fraction)
}
