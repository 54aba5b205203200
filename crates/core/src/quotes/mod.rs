//! Price oracle domain - quote model and lookup contract.

pub mod quotes_model;
pub mod quotes_traits;

pub use quotes_model::*;
pub use quotes_traits::*;
