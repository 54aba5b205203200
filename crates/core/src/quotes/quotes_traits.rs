use std::collections::HashMap;

use super::quotes_model::Quote;
use crate::Result;

/// Trait defining the contract for the current-price lookup service.
///
/// The oracle refreshes independently of the aggregation engine. Symbols it
/// has no data for are simply absent from the returned map; the engine
/// values those positions at zero rather than failing.
pub trait PriceOracleTrait: Send + Sync {
    /// Returns the latest quote per symbol for the requested set.
    fn get_latest_quotes(&self, symbols: &[String]) -> Result<HashMap<String, Quote>>;
}
