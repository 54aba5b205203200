//! Tallyfolio Core - portfolio holdings and performance aggregation.
//!
//! This crate derives a user's open positions and aggregate realized +
//! unrealized performance from an append-only buy/sell history. It is
//! backend-agnostic: persistence and market data are reached through the
//! `TransactionRepositoryTrait` and `PriceOracleTrait` seams, and the
//! calculators themselves are pure functions recomputed from scratch on
//! every cycle.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod quotes;
pub mod transactions;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
