use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// View model for one currently open position, synthesized fresh on every
/// recomputation pass. Holdings carry no persisted identity; they live for
/// one aggregation cycle and are then replaced wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    /// Net open quantity (buys minus sells, in shares/units).
    pub quantity: Decimal,
    /// Cost basis of the currently open quantity only, in currency units.
    pub total_cost: Decimal,
    /// Weighted-average cost per unit (`total_cost / quantity`).
    pub average_cost: Decimal,
    /// Latest oracle price; zero when the oracle has no data for the symbol.
    pub current_price: Decimal,
    pub market_value: Decimal,
    /// Unrealized gain on the open position (`market_value - total_cost`).
    pub unrealized_gain: Decimal,
    pub unrealized_gain_pct: Decimal,
}

/// Whole-portfolio performance spanning realized and unrealized gains.
///
/// Symbols bought and fully sold no longer appear as holdings, but their
/// buy/sell cash flows still land in `total_invested`/`total_sold_value`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    /// Sum over all buys, all symbols, all time, of quantity × price.
    pub total_invested: Decimal,
    /// Sum over all sells of quantity × price (sale proceeds, not gain).
    pub total_sold_value: Decimal,
    /// Sum over open holdings of quantity × current price.
    pub current_value: Decimal,
    /// `(current_value + total_sold_value) - total_invested`.
    pub total_gain: Decimal,
    pub total_gain_pct: Decimal,
}

impl PortfolioPerformance {
    pub fn zero() -> Self {
        PortfolioPerformance {
            total_invested: Decimal::ZERO,
            total_sold_value: Decimal::ZERO,
            current_value: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            total_gain_pct: Decimal::ZERO,
        }
    }
}

/// Result of one full fetch-and-recompute cycle.
///
/// `as_of` lets callers racing concurrent refreshes discard stale responses
/// that arrive out of order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub holdings: Vec<Holding>,
    pub performance: PortfolioPerformance,
    pub as_of: DateTime<Utc>,
}
