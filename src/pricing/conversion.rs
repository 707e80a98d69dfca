//! Price-ratio conversion between two currencies of a price list.

use crate::entity::{ConversionError, PriceRecord};
use crate::utils::{coerce_amount, format_fixed};

/// Number of decimals every converted amount is rendered with.
pub const CONVERSION_DECIMALS: usize = 6;

/// Anything the form can hand over as an amount: typed text or a number.
pub trait AmountInput {
    fn to_amount(&self) -> f64;

    fn describe(&self) -> String;
}

impl AmountInput for str {
    fn to_amount(&self) -> f64 {
        coerce_amount(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AmountInput for String {
    fn to_amount(&self) -> f64 {
        coerce_amount(self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl AmountInput for f64 {
    fn to_amount(&self) -> f64 {
        *self
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

// Price of the first record for `currency`; missing or unusable prices count as zero
fn lookup_price(prices: &[PriceRecord], currency: &str) -> f64 {
    prices
        .iter()
        .find(|record| record.currency == currency)
        .map(|record| record.price)
        .filter(|price| !price.is_nan())
        .unwrap_or(0.0)
}

/// Converts `amount` of `from_currency` into `to_currency`.
///
/// The division is left unguarded: when the target currency is missing or
/// priced at zero the result is `"NaN"` or `"Infinity"`. Use [`try_convert`]
/// where a non-finite value must not reach the user.
pub fn convert<A: AmountInput + ?Sized>(
    amount: &A,
    from_currency: &str,
    to_currency: &str,
    prices: &[PriceRecord],
) -> String {
    let from_price = lookup_price(prices, from_currency);
    let to_price = lookup_price(prices, to_currency);

    format_fixed(
        (amount.to_amount() * from_price) / to_price,
        CONVERSION_DECIMALS,
    )
}

/// Checked variant of [`convert`] returning the raw ratio result.
pub fn try_convert<A: AmountInput + ?Sized>(
    amount: &A,
    from_currency: &str,
    to_currency: &str,
    prices: &[PriceRecord],
) -> Result<f64, ConversionError> {
    let value = amount.to_amount();
    if value.is_nan() {
        return Err(ConversionError::InvalidAmount(amount.describe()));
    }

    let from_price = checked_price(prices, from_currency)?;
    let to_price = checked_price(prices, to_currency)?;

    let result = (value * from_price) / to_price;
    if !result.is_finite() {
        return Err(ConversionError::NonFinite(amount.describe()));
    }

    Ok(result)
}

fn checked_price(prices: &[PriceRecord], currency: &str) -> Result<f64, ConversionError> {
    if !prices.iter().any(|record| record.currency == currency) {
        return Err(ConversionError::UnknownCurrency(currency.to_string()));
    }

    let price = lookup_price(prices, currency);
    if price <= 0.0 || !price.is_finite() {
        return Err(ConversionError::ZeroPrice(currency.to_string()));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth_usdc() -> Vec<PriceRecord> {
        vec![PriceRecord::new("ETH", 2000.0), PriceRecord::new("USDC", 1.0)]
    }

    #[test]
    fn test_convert_eth_to_usdc() {
        assert_eq!(convert(&100.0, "ETH", "USDC", &eth_usdc()), "200000.000000");
        assert_eq!(convert("100", "ETH", "USDC", &eth_usdc()), "200000.000000");
    }

    #[test]
    fn test_convert_same_currency_is_identity() {
        let prices = vec![
            PriceRecord::new("ETH", 1645.9337373737374),
            PriceRecord::new("ATOM", 7.186657333333334),
        ];

        for amount in ["1", "0.5", "123.456789", "98765.4321"] {
            for currency in ["ETH", "ATOM"] {
                let converted = convert(amount, currency, currency, &prices);
                let expected = format_fixed(coerce_amount(amount), CONVERSION_DECIMALS);
                assert_eq!(converted, expected, "{} {}", amount, currency);
            }
        }
    }

    #[test]
    fn test_convert_to_missing_currency_is_not_finite() {
        let prices = vec![PriceRecord::new("ETH", 2000.0)];

        let converted = convert(&50.0, "ETH", "MISSING", &prices);
        assert_eq!(converted, "Infinity");

        let converted = convert(&0.0, "ETH", "MISSING", &prices);
        assert_eq!(converted, "NaN");
    }

    #[test]
    fn test_convert_coerces_text_amounts() {
        assert_eq!(convert("", "ETH", "USDC", &eth_usdc()), "0.000000");
        assert_eq!(convert("abc", "ETH", "USDC", &eth_usdc()), "NaN");
    }

    #[test]
    fn test_try_convert_errors() {
        let prices = vec![
            PriceRecord::new("ETH", 2000.0),
            PriceRecord::new("FREE", 0.0),
        ];

        assert_eq!(
            try_convert(&50.0, "ETH", "MISSING", &prices),
            Err(ConversionError::UnknownCurrency("MISSING".to_string()))
        );
        assert_eq!(
            try_convert(&50.0, "ETH", "FREE", &prices),
            Err(ConversionError::ZeroPrice("FREE".to_string()))
        );
        assert_eq!(
            try_convert("abc", "ETH", "ETH", &prices),
            Err(ConversionError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(try_convert("2", "ETH", "ETH", &prices), Ok(2.0));
    }
}
