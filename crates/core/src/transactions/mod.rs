//! Transaction store domain - models, repository contract, in-memory store.

pub mod memory_repository;
pub mod transactions_model;
pub mod transactions_traits;

pub use memory_repository::*;
pub use transactions_model::*;
pub use transactions_traits::*;
