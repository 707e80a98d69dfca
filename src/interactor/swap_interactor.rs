use crate::entity::{ConversionError, ConversionRequest, SwapOrder, SwapResult};
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::time::Duration;

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    /// Converts a captured request into the "to" amount
    async fn quote(&self, request: &ConversionRequest) -> Result<String, ConversionError>;

    async fn execute_swap(&self, order: &SwapOrder) -> Result<SwapResult>;
}

/// Swap backend without an exchange behind it: both operations only wait
/// for a configured latency. `execute_swap` never fails.
pub struct SimulatedSwapInteractor {
    conversion_latency: Duration,
    swap_delay: Duration,
}

impl SimulatedSwapInteractor {
    pub fn new(conversion_latency: Duration, swap_delay: Duration) -> Self {
        Self {
            conversion_latency,
            swap_delay,
        }
    }
}

#[async_trait]
impl SwapInteractor for SimulatedSwapInteractor {
    async fn quote(&self, request: &ConversionRequest) -> Result<String, ConversionError> {
        tokio::time::sleep(self.conversion_latency).await;

        request
            .prices
            .try_convert(&request.amount, &request.from_currency, &request.to_currency)
    }

    async fn execute_swap(&self, order: &SwapOrder) -> Result<SwapResult> {
        info!(
            "Swapping {} {} for {} {}",
            order.amount_in, order.from_currency, order.amount_out, order.to_currency
        );

        tokio::time::sleep(self.swap_delay).await;

        Ok(SwapResult {
            from_currency: order.from_currency.clone(),
            to_currency: order.to_currency.clone(),
            amount_in: order.amount_in.clone(),
            amount_out: order.amount_out.clone(),
            success: true,
            error_message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PriceRecord;
    use crate::pricing::PriceStore;
    use std::sync::Arc;
    use tokio::time::Instant;

    fn request(amount: &str, to: &str) -> ConversionRequest {
        ConversionRequest {
            amount: amount.to_string(),
            from_currency: "ETH".to_string(),
            to_currency: to.to_string(),
            prices: Arc::new(PriceStore::from_records(vec![
                PriceRecord::new("ETH", 2000.0),
                PriceRecord::new("USDC", 1.0),
            ])),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_quote_applies_latency() {
        let interactor =
            SimulatedSwapInteractor::new(Duration::from_millis(500), Duration::from_millis(1500));

        let started = Instant::now();
        let amount = interactor.quote(&request("100", "USDC")).await.unwrap();

        assert_eq!(amount, "200000.000000");
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_quote_unknown_currency() {
        let interactor = SimulatedSwapInteractor::new(Duration::ZERO, Duration::ZERO);

        let err = interactor.quote(&request("50", "MISSING")).await.unwrap_err();

        assert_eq!(err, ConversionError::UnknownCurrency("MISSING".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_swap_succeeds_after_delay() {
        let interactor =
            SimulatedSwapInteractor::new(Duration::from_millis(500), Duration::from_millis(1500));
        let order = SwapOrder {
            from_currency: "ETH".to_string(),
            to_currency: "USDC".to_string(),
            amount_in: "10".to_string(),
            amount_out: "20000.000000".to_string(),
        };

        let started = Instant::now();
        let result = interactor.execute_swap(&order).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(result.success);
        assert_eq!(result.amount_in, "10");
        assert_eq!(result.amount_out, "20000.000000");
        assert!(result.error_message.is_none());
    }
}
