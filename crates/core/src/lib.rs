//! Carvalue Core - used-car resale valuation.
//!
//! A vehicle's purchase value is depreciated by age, mileage, ownership
//! history, and collisions, in that fixed order, with a bonus for vehicles
//! that never had a previous owner applied last.
//!
//! ```
//! use carvalue_core::{ValuationService, ValuationServiceTrait, Vehicle};
//! use rust_decimal_macros::dec;
//!
//! let service = ValuationService::new();
//! let vehicle = Vehicle::new(dec!(35000), 36, 50_000, 1, 1);
//! assert_eq!(service.determine_value(&vehicle), dec!(25313.40));
//! ```

pub mod constants;
pub mod errors;
pub mod valuation;
pub mod vehicles;

pub use valuation::*;
pub use vehicles::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
