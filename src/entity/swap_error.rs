#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("A swap is already in progress")]
    SwapInProgress,

    #[error("Swap failed. Please try again.")]
    SwapFailed(String),

    #[error("Price source error: {0}")]
    PriceSource(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid price data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("No usable price for {0}")]
    ZeroPrice(String),

    #[error("Conversion of {0} produced a non-finite value")]
    NonFinite(String),
}
