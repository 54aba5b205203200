#[cfg(test)]
mod tests {
    use crate::portfolio::portfolio_service::{PortfolioService, PortfolioServiceTrait};
    use crate::quotes::{PriceOracleTrait, Quote};
    use crate::transactions::{
        InMemoryTransactionRepository, NewTransaction, TransactionRepositoryTrait, TransactionType,
    };
    use crate::Result;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Arc;

    // --- Mock PriceOracle ---
    struct MockPriceOracle {
        quotes: HashMap<String, Quote>,
    }

    impl MockPriceOracle {
        fn new(entries: &[(&str, Decimal)]) -> Self {
            let quotes = entries
                .iter()
                .map(|(symbol, price)| {
                    (
                        symbol.to_string(),
                        Quote {
                            symbol: symbol.to_string(),
                            price: *price,
                            currency: "USD".to_string(),
                            timestamp: Utc::now(),
                        },
                    )
                })
                .collect();
            MockPriceOracle { quotes }
        }
    }

    impl PriceOracleTrait for MockPriceOracle {
        fn get_latest_quotes(&self, symbols: &[String]) -> Result<HashMap<String, Quote>> {
            Ok(symbols
                .iter()
                .filter_map(|symbol| {
                    self.quotes
                        .get(symbol)
                        .map(|quote| (symbol.clone(), quote.clone()))
                })
                .collect())
        }
    }

    fn new_tx(symbol: &str, quantity: Decimal, price: Decimal, side: TransactionType, day: u32) -> NewTransaction {
        NewTransaction {
            symbol: symbol.to_string(),
            quantity,
            price,
            transaction_type: side,
            transaction_date: Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap(),
        }
    }

    fn service(oracle_entries: &[(&str, Decimal)]) -> PortfolioService {
        PortfolioService::new(
            Arc::new(InMemoryTransactionRepository::new()),
            Arc::new(MockPriceOracle::new(oracle_entries)),
        )
    }

    #[tokio::test]
    async fn test_snapshot_for_unknown_user_is_empty() {
        let service = service(&[]);
        let snapshot = service.get_snapshot("nobody").await.unwrap();
        assert!(snapshot.holdings.is_empty());
        assert_eq!(snapshot.performance.total_gain, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_add_transaction_refreshes_snapshot() {
        let service = service(&[("AAPL", dec!(180))]);

        let snapshot = service
            .add_transaction(
                "user-1",
                new_tx("AAPL", dec!(10), dec!(150), TransactionType::Buy, 1),
            )
            .await
            .unwrap();

        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.holdings[0].symbol, "AAPL");
        assert_eq!(snapshot.holdings[0].market_value, dec!(1800));
        assert_eq!(snapshot.performance.total_invested, dec!(1500));
        assert_eq!(snapshot.performance.total_gain, dec!(300));
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_the_store() {
        let service = service(&[]);
        let result = service
            .add_transaction(
                "user-1",
                new_tx("AAPL", Decimal::ZERO, dec!(150), TransactionType::Buy, 1),
            )
            .await;
        assert!(result.is_err());

        let snapshot = service.get_snapshot("user-1").await.unwrap();
        assert!(snapshot.holdings.is_empty());
    }

    #[tokio::test]
    async fn test_delete_symbol_drops_holding_and_performance() {
        let service = service(&[("AAPL", dec!(180)), ("MSFT", dec!(310))]);

        service
            .add_transaction(
                "user-1",
                new_tx("AAPL", dec!(10), dec!(150), TransactionType::Buy, 1),
            )
            .await
            .unwrap();
        service
            .add_transaction(
                "user-1",
                new_tx("MSFT", dec!(5), dec!(300), TransactionType::Buy, 2),
            )
            .await
            .unwrap();

        let snapshot = service.delete_symbol("user-1", "AAPL").await.unwrap();

        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.holdings[0].symbol, "MSFT");
        // The delete removes the history wholesale, so AAPL's buy no longer
        // contributes to invested capital either.
        assert_eq!(snapshot.performance.total_invested, dec!(1500));
        assert_eq!(snapshot.performance.current_value, dec!(1550));
    }

    #[tokio::test]
    async fn test_full_close_survives_in_performance() {
        let service = service(&[("XYZ", dec!(20))]);

        service
            .add_transaction(
                "user-1",
                new_tx("XYZ", dec!(10), dec!(10), TransactionType::Buy, 1),
            )
            .await
            .unwrap();
        let snapshot = service
            .add_transaction(
                "user-1",
                new_tx("XYZ", dec!(10), dec!(15), TransactionType::Sell, 2),
            )
            .await
            .unwrap();

        assert!(snapshot.holdings.is_empty());
        assert_eq!(snapshot.performance.total_gain, dec!(50));
        assert_eq!(snapshot.performance.total_gain_pct, dec!(50));
    }

    #[tokio::test]
    async fn test_repository_scopes_by_user() {
        let repository = Arc::new(InMemoryTransactionRepository::new());
        let service = PortfolioService::new(
            repository.clone(),
            Arc::new(MockPriceOracle::new(&[("AAPL", dec!(180))])),
        );

        service
            .add_transaction(
                "alice",
                new_tx("AAPL", dec!(10), dec!(150), TransactionType::Buy, 1),
            )
            .await
            .unwrap();

        let bob = service.get_snapshot("bob").await.unwrap();
        assert!(bob.holdings.is_empty());

        assert_eq!(repository.get_transactions("alice").unwrap().len(), 1);
        assert!(repository.get_transactions("bob").unwrap().is_empty());

        let removed = repository
            .delete_transactions_for_symbol("bob", "AAPL")
            .await
            .unwrap();
        assert_eq!(removed, 0);
        assert_eq!(repository.get_transactions("alice").unwrap().len(), 1);
    }
}
