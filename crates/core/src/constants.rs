use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Miles per mileage block. Miles beyond the last full block are ignored.
pub const MILES_PER_BLOCK: u32 = 1_000;

/// Fraction of value lost per month of age
pub const AGE_RATE_PER_MONTH: Decimal = dec!(0.005);

/// Months after which age stops reducing value
pub const AGE_CAP_MONTHS: u32 = 120;

/// Fraction of value lost per 1,000-mile block
pub const MILEAGE_RATE_PER_BLOCK: Decimal = dec!(0.002);

/// Miles after which mileage stops reducing value
pub const MILEAGE_CAP_MILES: u32 = 150_000;

/// Owner counts strictly above this trigger the ownership penalty
pub const OWNER_PENALTY_THRESHOLD: u32 = 2;

/// Flat reduction for too many previous owners
pub const OWNER_PENALTY_RATE: Decimal = dec!(0.25);

/// Bonus for a vehicle with no previous owners
pub const NO_OWNER_BONUS_RATE: Decimal = dec!(0.10);

/// Fraction of value lost per reported collision
pub const COLLISION_RATE: Decimal = dec!(0.02);

/// Collision counts at or above this disable the collision reduction entirely
pub const COLLISION_CAP: u32 = 5;
