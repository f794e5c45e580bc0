//! Valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AGE_CAP_MONTHS, AGE_RATE_PER_MONTH, COLLISION_CAP, COLLISION_RATE, MILEAGE_CAP_MILES,
    MILEAGE_RATE_PER_BLOCK, MILES_PER_BLOCK, NO_OWNER_BONUS_RATE, OWNER_PENALTY_RATE,
    OWNER_PENALTY_THRESHOLD,
};
use crate::errors::ValidationError;

/// Depreciation policy captured by the valuation engine.
///
/// `Default` yields the fixed house policy from [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationPolicy {
    pub age_rate_per_month: Decimal,
    pub age_cap_months: u32,
    pub mileage_rate_per_block: Decimal,
    pub mileage_cap_miles: u32,
    pub owner_penalty_threshold: u32,
    pub owner_penalty_rate: Decimal,
    pub no_owner_bonus_rate: Decimal,
    pub collision_rate: Decimal,
    pub collision_cap: u32,
}

impl Default for ValuationPolicy {
    fn default() -> Self {
        ValuationPolicy {
            age_rate_per_month: AGE_RATE_PER_MONTH,
            age_cap_months: AGE_CAP_MONTHS,
            mileage_rate_per_block: MILEAGE_RATE_PER_BLOCK,
            mileage_cap_miles: MILEAGE_CAP_MILES,
            owner_penalty_threshold: OWNER_PENALTY_THRESHOLD,
            owner_penalty_rate: OWNER_PENALTY_RATE,
            no_owner_bonus_rate: NO_OWNER_BONUS_RATE,
            collision_rate: COLLISION_RATE,
            collision_cap: COLLISION_CAP,
        }
    }
}

impl ValuationPolicy {
    /// Checks that no vehicle can be driven below zero by this policy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let rates = [
            ("ageRatePerMonth", self.age_rate_per_month),
            ("mileageRatePerBlock", self.mileage_rate_per_block),
            ("ownerPenaltyRate", self.owner_penalty_rate),
            ("noOwnerBonusRate", self.no_owner_bonus_rate),
            ("collisionRate", self.collision_rate),
        ];
        for (field, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ValidationError::RateOutOfRange {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        let max_age_reduction = self.age_rate_per_month * Decimal::from(self.age_cap_months);
        if max_age_reduction > Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "age reduction at {} months would be {}, above 100%",
                self.age_cap_months, max_age_reduction
            )));
        }

        let max_blocks = self.mileage_cap_miles / MILES_PER_BLOCK;
        let max_mileage_reduction = self.mileage_rate_per_block * Decimal::from(max_blocks);
        if max_mileage_reduction > Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "mileage reduction at {} miles would be {}, above 100%",
                self.mileage_cap_miles, max_mileage_reduction
            )));
        }

        // Reductions stop at the cap, so the worst case is one collision short of it.
        let max_collisions = self.collision_cap.saturating_sub(1);
        let max_collision_reduction = self.collision_rate * Decimal::from(max_collisions);
        if max_collision_reduction > Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "collision reduction at {} collisions would be {}, above 100%",
                max_collisions, max_collision_reduction
            )));
        }

        Ok(())
    }
}

/// Which ownership rule a vehicle falls under. Exactly one applies per valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipAdjustment {
    /// More owners than the threshold; reduces value before collisions.
    Penalty,
    /// No previous owners; raises value after collisions.
    Bonus,
    None,
}

impl OwnershipAdjustment {
    pub fn for_owners(previous_owners: u32, policy: &ValuationPolicy) -> Self {
        if previous_owners == 0 {
            OwnershipAdjustment::Bonus
        } else if previous_owners > policy.owner_penalty_threshold {
            OwnershipAdjustment::Penalty
        } else {
            OwnershipAdjustment::None
        }
    }
}

/// Price after every stage of a single valuation.
///
/// Stage prices are unrounded; only `value` is rounded to cents. Stages that
/// would overflow saturate at `Decimal::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationBreakdown {
    pub purchase_value: Decimal,
    pub effective_months: u32,
    pub after_age: Decimal,
    pub effective_blocks: u32,
    pub after_mileage: Decimal,
    pub ownership: OwnershipAdjustment,
    pub after_owner_penalty: Decimal,
    pub effective_collisions: u32,
    pub after_collisions: Decimal,
    pub after_owner_bonus: Decimal,
    pub value: Decimal,
}
