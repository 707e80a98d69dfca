use std::sync::Arc;

use crate::pricing::PriceStore;

/// Amounts and currencies captured when the user pressed swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOrder {
    pub from_currency: String,
    pub to_currency: String,
    pub amount_in: String,
    pub amount_out: String,
}

/// A debounced conversion, captured by value at the time of the keystroke.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: String,
    pub from_currency: String,
    pub to_currency: String,
    pub prices: Arc<PriceStore>,
}

impl ConversionRequest {
    pub fn pair(&self) -> (&str, &str) {
        (&self.from_currency, &self.to_currency)
    }
}
