//! Portfolio aggregation - holdings calculators and orchestration service.

pub mod holdings;
pub mod portfolio_service;

pub use holdings::*;
pub use portfolio_service::*;

#[cfg(test)]
mod portfolio_service_tests;
