use std::sync::Arc;

use crate::entity::{ConversionError, ConversionRequest, Side, SwapError, SwapOrder, TokenSelection};
use crate::pricing::PriceStore;
use crate::utils::{is_numeric_amount, is_positive_amount};

pub const DEFAULT_FROM_CURRENCY: &str = "ETH";
pub const DEFAULT_TO_CURRENCY: &str = "USDC";

/// State of the swap form. Every mutation goes through one of the update
/// methods below; none of them perform I/O or wait on timers.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapFormState {
    pub from: TokenSelection,
    pub to: TokenSelection,
    pub loading: bool,
    pub conversion_loading: bool,
    pub swapping: bool,
    conversions_in_flight: usize,
}

impl Default for SwapFormState {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY)
    }
}

impl SwapFormState {
    pub fn new(from_currency: &str, to_currency: &str) -> Self {
        Self {
            from: TokenSelection::new(from_currency),
            to: TokenSelection::new(to_currency),
            loading: true,
            conversion_loading: false,
            swapping: false,
            conversions_in_flight: 0,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_from_amount(&mut self, amount: &str) {
        self.from.amount = amount.to_string();
    }

    /// Snapshot of what a debounced conversion needs, taken by value.
    pub fn conversion_request(&self, prices: Arc<PriceStore>) -> ConversionRequest {
        ConversionRequest {
            amount: self.from.amount.clone(),
            from_currency: self.from.currency.clone(),
            to_currency: self.to.currency.clone(),
            prices,
        }
    }

    /// Changes the currency on one side. When the "from" amount is numeric the
    /// "to" amount is recomputed right away with the new pair.
    pub fn select_currency(
        &mut self,
        side: Side,
        currency: &str,
        prices: &PriceStore,
    ) -> Result<(), ConversionError> {
        match side {
            Side::From => self.from.currency = currency.to_string(),
            Side::To => self.to.currency = currency.to_string(),
        }

        if !is_numeric_amount(&self.from.amount) {
            return Ok(());
        }

        match prices.try_convert(&self.from.amount, &self.from.currency, &self.to.currency) {
            Ok(amount) => {
                self.to.amount = amount;
                Ok(())
            }
            Err(e) => {
                self.to.amount.clear();
                Err(e)
            }
        }
    }

    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn begin_conversion(&mut self) {
        self.conversions_in_flight += 1;
        self.conversion_loading = true;
    }

    /// Applies a finished conversion. Returns false, leaving the amounts
    /// alone, when the currency pair or the "from" amount changed since the
    /// request was captured.
    pub fn finish_conversion(
        &mut self,
        request: &ConversionRequest,
        outcome: &Result<String, ConversionError>,
    ) -> bool {
        self.conversions_in_flight = self.conversions_in_flight.saturating_sub(1);
        self.conversion_loading = self.conversions_in_flight > 0;

        if self.from.currency != request.from_currency
            || self.to.currency != request.to_currency
            || self.from.amount != request.amount
        {
            return false;
        }

        match outcome {
            Ok(amount) => self.to.amount = amount.clone(),
            Err(_) => self.to.amount.clear(),
        }

        true
    }

    pub fn clear_to_amount(&mut self) {
        self.to.amount.clear();
    }

    /// Validates the "from" amount and marks the form as swapping.
    /// On error the state is left untouched.
    pub fn begin_swap(&mut self) -> Result<SwapOrder, SwapError> {
        if self.swapping {
            return Err(SwapError::SwapInProgress);
        }

        if !is_positive_amount(&self.from.amount) {
            return Err(SwapError::InvalidAmount);
        }

        self.swapping = true;

        Ok(SwapOrder {
            from_currency: self.from.currency.clone(),
            to_currency: self.to.currency.clone(),
            amount_in: self.from.amount.clone(),
            amount_out: self.to.amount.clone(),
        })
    }

    pub fn finish_swap(&mut self, success: bool) {
        self.swapping = false;

        if success {
            self.from.amount.clear();
            self.to.amount.clear();
        }
    }
}
