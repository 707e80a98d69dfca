use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String, // Token ticker (e.g. "ETH", "USDC")
    pub price: f64,       // Unit price against the common denominator
}

impl PriceRecord {
    pub fn new(currency: impl Into<String>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            price,
        }
    }
}
