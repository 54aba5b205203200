//! Market quote domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest known market price for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    /// Latest traded price in the quote currency.
    pub price: Decimal,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
}
