use crate::errors::Result;
use crate::valuation::valuation_calculator::calculate_valuation;
use crate::valuation::valuation_model::{ValuationBreakdown, ValuationPolicy};
use crate::vehicles::Vehicle;
use log::{debug, warn};
use rust_decimal::Decimal;

pub trait ValuationServiceTrait: Send + Sync {
    /// Determines the resale value of a vehicle, rounded to cents.
    ///
    /// Args:
    ///     vehicle: The vehicle to value.
    ///
    /// Returns:
    ///     The resale value. Valuation has no failure modes.
    fn determine_value(&self, vehicle: &Vehicle) -> Decimal;

    /// Same as `determine_value`, but keeps the price after every stage.
    fn determine_value_breakdown(&self, vehicle: &Vehicle) -> ValuationBreakdown;

    fn policy(&self) -> &ValuationPolicy;
}

#[derive(Debug, Clone, Default)]
pub struct ValuationService {
    policy: ValuationPolicy,
}

impl ValuationService {
    /// Creates a service using the fixed house policy.
    pub fn new() -> Self {
        ValuationService {
            policy: ValuationPolicy::default(),
        }
    }

    /// Creates a service around a custom policy, rejecting policies that
    /// could value a vehicle below zero.
    pub fn with_policy(policy: ValuationPolicy) -> Result<Self> {
        if let Err(e) = policy.validate() {
            warn!("Rejected valuation policy: {}", e);
            return Err(e.into());
        }
        debug!("Valuation service created with policy {:?}", policy);
        Ok(ValuationService { policy })
    }
}

impl ValuationServiceTrait for ValuationService {
    fn determine_value(&self, vehicle: &Vehicle) -> Decimal {
        self.determine_value_breakdown(vehicle).value
    }

    fn determine_value_breakdown(&self, vehicle: &Vehicle) -> ValuationBreakdown {
        debug!("Determining value for {:?}", vehicle);
        let breakdown = calculate_valuation(vehicle, &self.policy);
        debug!(
            "Valued vehicle purchased at {} at {}",
            breakdown.purchase_value, breakdown.value
        );
        breakdown
    }

    fn policy(&self) -> &ValuationPolicy {
        &self.policy
    }
}
