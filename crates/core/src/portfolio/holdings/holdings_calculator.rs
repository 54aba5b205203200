//! Pure calculators for open holdings and aggregate performance.
//!
//! Both functions are deterministic over their inputs: no hidden state, no
//! I/O, full recomputation on every call. There is deliberately no
//! incremental update path; the orchestration layer re-runs them from the
//! complete transaction list after every confirmed mutation.

use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::QUANTITY_THRESHOLD;
use crate::portfolio::holdings::holdings_model::{Holding, PortfolioPerformance};
use crate::transactions::{Transaction, TransactionType};

/// Returns true when the quantity is large enough to count as an open
/// position. Repeated proportional cost relief accumulates drift, so every
/// zero-equality check goes through this tolerance.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold =
        Decimal::from_str_radix(QUANTITY_THRESHOLD, 10).unwrap_or_else(|_| Decimal::new(1, 9));
    quantity.abs() >= threshold
}

/// Running reduction state for one symbol.
struct PositionState {
    quantity: Decimal,
    total_cost: Decimal,
}

/// Computes the list of currently open positions from the full transaction
/// history and a current-price map.
///
/// Transactions are replayed in ascending date order (stable, so ties keep
/// submission order) and folded into `{quantity, total_cost}` per symbol:
///
/// * buy: quantity and cost basis grow by the purchase.
/// * sell: cost basis shrinks proportionally to the fraction of shares sold
///   (weighted-average method, not FIFO/LIFO lot relief).
///
/// A sell against an empty position is skipped, and a sell exceeding the
/// open quantity is clamped to it, so net quantity never goes negative.
/// Symbols whose net quantity ends below the tolerance are omitted from the
/// result; their history still feeds [`compute_performance`].
///
/// Symbols missing from `prices` are valued at zero, which shows a fully
/// priced-out position as a 100% loss rather than "unknown".
pub fn compute_holdings(
    transactions: &[Transaction],
    prices: &HashMap<String, Decimal>,
) -> Vec<Holding> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.transaction_date);

    let mut states: HashMap<String, PositionState> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for tx in ordered {
        if !states.contains_key(&tx.symbol) {
            first_seen.push(tx.symbol.clone());
        }
        let state = states.entry(tx.symbol.clone()).or_insert(PositionState {
            quantity: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        });

        match tx.transaction_type {
            TransactionType::Buy => {
                state.quantity += tx.quantity;
                state.total_cost += tx.quantity * tx.price;
            }
            TransactionType::Sell => {
                if state.quantity <= Decimal::ZERO || !is_quantity_significant(&state.quantity) {
                    warn!(
                        "Sell of {} {} with no open position (transaction {}). Skipping reduction.",
                        tx.quantity, tx.symbol, tx.id
                    );
                    continue;
                }

                let mut sell_quantity = tx.quantity;
                if sell_quantity > state.quantity {
                    warn!(
                        "Sell of {} {} exceeds open quantity {} (transaction {}). Clamping to the open quantity.",
                        tx.quantity, tx.symbol, state.quantity, tx.id
                    );
                    sell_quantity = state.quantity;
                }

                // Weighted-average relief: selling a fraction of the shares
                // removes the same fraction of the accumulated cost basis,
                // regardless of which purchase the shares came from.
                let proportion_sold = sell_quantity / state.quantity;
                state.total_cost -= state.total_cost * proportion_sold;
                state.quantity -= sell_quantity;
            }
        }
    }

    let mut holdings: Vec<Holding> = Vec::new();
    for symbol in first_seen {
        let Some(state) = states.remove(&symbol) else {
            continue;
        };
        if state.quantity <= Decimal::ZERO || !is_quantity_significant(&state.quantity) {
            // Closed out. Invisible here, still counted by compute_performance.
            continue;
        }

        let current_price = match prices.get(&symbol) {
            Some(price) => *price,
            None => {
                debug!("No quote for {}. Valuing the position at zero.", symbol);
                Decimal::ZERO
            }
        };

        let average_cost = state.total_cost / state.quantity;
        let market_value = state.quantity * current_price;
        let unrealized_gain = market_value - state.total_cost;
        let unrealized_gain_pct = if state.total_cost > Decimal::ZERO {
            unrealized_gain / state.total_cost * dec!(100)
        } else {
            Decimal::ZERO
        };

        holdings.push(Holding {
            symbol,
            quantity: state.quantity,
            total_cost: state.total_cost,
            average_cost,
            current_price,
            market_value,
            unrealized_gain,
            unrealized_gain_pct,
        });
    }

    holdings
}

/// Computes aggregate realized + unrealized performance across the entire
/// transaction history.
///
/// This is a pure cash-flow sum, order independent, so the transaction list
/// needs no sorting here. `holdings` must come from [`compute_holdings`] over
/// the same list; it supplies the current value of open positions, while the
/// sums also capture symbols that were fully closed out and therefore carry
/// no holding.
pub fn compute_performance(
    transactions: &[Transaction],
    holdings: &[Holding],
) -> PortfolioPerformance {
    let mut total_invested = Decimal::ZERO;
    let mut total_sold_value = Decimal::ZERO;

    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Buy => total_invested += tx.gross_amount(),
            TransactionType::Sell => total_sold_value += tx.gross_amount(),
        }
    }

    let current_value: Decimal = holdings
        .iter()
        .map(|holding| holding.quantity * holding.current_price)
        .sum();

    let total_gain = current_value + total_sold_value - total_invested;
    let total_gain_pct = if total_invested > Decimal::ZERO {
        total_gain / total_invested * dec!(100)
    } else {
        Decimal::ZERO
    };

    PortfolioPerformance {
        total_invested,
        total_sold_value,
        current_value,
        total_gain,
        total_gain_pct,
    }
}
