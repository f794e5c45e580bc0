//! Vehicle domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A used car as seen by the valuation engine.
///
/// The record has no identity. Callers build one, value it, and drop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub purchase_value: Decimal,
    pub age_in_months: u32,
    pub miles: u32,
    pub previous_owners: u32,
    pub collisions: u32,
}

impl Vehicle {
    pub fn new(
        purchase_value: Decimal,
        age_in_months: u32,
        miles: u32,
        previous_owners: u32,
        collisions: u32,
    ) -> Self {
        Vehicle {
            purchase_value,
            age_in_months,
            miles,
            previous_owners,
            collisions,
        }
    }
}
