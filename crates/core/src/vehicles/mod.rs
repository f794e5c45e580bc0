//! Vehicles module - the input record handed to the valuation engine.

mod vehicles_model;

pub use vehicles_model::Vehicle;
