//! Holdings aggregation - view models and pure calculators.

pub mod holdings_calculator;
pub mod holdings_model;

pub use holdings_calculator::*;
pub use holdings_model::*;
